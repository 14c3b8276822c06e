use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use pg_app::{run_batch, run_batch_with_progress, AppError, BatchRequest, BatchStage};
use pg_core::{AirfoilSpec, SweepParameters};
use pg_xfoil::{
    coordinates_artifact_name, polar_artifact_name, PolarJob, PolarSolver, XfoilResult,
    BL_TEMP_FILE,
};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

/// One recorded invocation: airfoil identifier, AOA list, Reynolds number.
type Call = (String, Vec<f64>, f64);

/// Fake backend that records every call and drops the same artifacts the
/// real solver would: a coordinate file (parametric mode only), one polar
/// file per Reynolds number, and the boundary-layer temp file.
struct RecordingSolver {
    calls: Mutex<Vec<Call>>,
    fail_after: Option<usize>,
}

impl RecordingSolver {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_after: None,
        }
    }

    fn failing_after(calls: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_after: Some(calls),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl PolarSolver for RecordingSolver {
    fn generate_polar(&self, job: &PolarJob<'_>) -> XfoilResult<()> {
        let mut calls = self.calls.lock().unwrap();
        if let Some(limit) = self.fail_after {
            if calls.len() >= limit {
                return Err(std::io::Error::other("solver diverged").into());
            }
        }
        calls.push((job.airfoil.to_string(), job.alphas.to_vec(), job.reynolds));

        let stem = job.airfoil.output_stem();
        if job.airfoil.is_parametric() {
            fs::write(
                job.workdir.join(coordinates_artifact_name(&stem)),
                format!("coords for {}", stem),
            )?;
        }
        fs::write(
            job.workdir.join(polar_artifact_name(&stem, job.reynolds)),
            format!("polar Re={}", job.reynolds),
        )?;
        fs::write(job.workdir.join(BL_TEMP_FILE), "bl dump")?;
        Ok(())
    }
}

fn naca0012_request(workdir: PathBuf) -> BatchRequest {
    BatchRequest {
        airfoil: AirfoilSpec::parse("naca0012").unwrap(),
        params: SweepParameters::default(),
        workdir,
    }
}

#[test]
fn parametric_batch_one_call_per_reynolds_with_shared_sweep() {
    let dir = unique_temp_dir("pg_app_naca");
    let solver = RecordingSolver::new();

    let summary = run_batch(&solver, &naca0012_request(dir.clone())).unwrap();
    assert_eq!(summary.polars_generated, 3);

    let calls = solver.calls();
    assert_eq!(calls.len(), 3);
    let reynolds: Vec<f64> = calls.iter().map(|c| c.2).collect();
    assert_eq!(reynolds, vec![1.0e4, 5.0e4, 1.0e5]);

    // All invocations share the identical sweep.
    let sweep = &calls[0].1;
    assert_eq!(sweep.len(), 90);
    assert_eq!(sweep[0], -20.0);
    assert_eq!(sweep[sweep.len() - 1], 24.5);
    for call in &calls {
        assert_eq!(&call.1, sweep);
        assert_eq!(call.0, "naca0012");
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn parametric_batch_leaves_normalized_artifacts() {
    let dir = unique_temp_dir("pg_app_artifacts");
    let solver = RecordingSolver::new();

    run_batch(&solver, &naca0012_request(dir.clone())).unwrap();

    assert!(dir.join("naca0012.dat").is_file());
    assert!(!dir.join(BL_TEMP_FILE).exists());

    let polar_txts: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("Polar_") && n.ends_with(".txt"))
        .collect();
    assert_eq!(polar_txts.len(), 3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn bare_prefix_identifier_runs_parametrically_without_file_check() {
    let dir = unique_temp_dir("pg_app_bare_prefix");
    let solver = RecordingSolver::new();

    // "naca" with no digits is still parametric: no coordinate file is
    // required and every Reynolds entry gets its solver call.
    let request = BatchRequest {
        airfoil: AirfoilSpec::parse("naca").unwrap(),
        params: SweepParameters::default(),
        workdir: dir.clone(),
    };
    let summary = run_batch(&solver, &request).unwrap();
    assert_eq!(summary.polars_generated, 3);
    assert_eq!(solver.calls().len(), 3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn uppercase_prefix_identifier_is_a_coordinate_file() {
    let dir = unique_temp_dir("pg_app_upper_prefix");
    let solver = RecordingSolver::new();

    let request = BatchRequest {
        airfoil: AirfoilSpec::parse("NACA0012").unwrap(),
        params: SweepParameters::default(),
        workdir: dir.clone(),
    };
    let err = run_batch(&solver, &request).unwrap_err();
    assert!(matches!(err, AppError::AirfoilNotFound { .. }));
    assert!(solver.calls().is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_coordinate_file_fails_before_any_solver_call() {
    let dir = unique_temp_dir("pg_app_missing");
    let solver = RecordingSolver::new();

    let request = BatchRequest {
        airfoil: AirfoilSpec::parse("myfoil").unwrap(),
        params: SweepParameters::default(),
        workdir: dir.clone(),
    };
    let err = run_batch(&solver, &request).unwrap_err();
    assert!(matches!(err, AppError::AirfoilNotFound { .. }));
    assert!(solver.calls().is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn coordinate_file_batch_runs_when_dat_exists() {
    let dir = unique_temp_dir("pg_app_datfile");
    fs::write(dir.join("myfoil.dat"), "existing coords").unwrap();
    let solver = RecordingSolver::new();

    let request = BatchRequest {
        airfoil: AirfoilSpec::parse("myfoil").unwrap(),
        params: SweepParameters::default(),
        workdir: dir.clone(),
    };
    let summary = run_batch(&solver, &request).unwrap();
    assert_eq!(summary.polars_generated, 3);
    assert_eq!(solver.calls().len(), 3);
    // The original coordinates are untouched in file mode.
    assert_eq!(
        fs::read_to_string(dir.join("myfoil.dat")).unwrap(),
        "existing coords"
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn solver_failure_aborts_batch_and_keeps_prior_artifacts() {
    let dir = unique_temp_dir("pg_app_failure");
    let solver = RecordingSolver::failing_after(1);

    let err = run_batch(&solver, &naca0012_request(dir.clone())).unwrap_err();
    assert!(matches!(err, AppError::Solver(_)));
    assert_eq!(solver.calls().len(), 1);

    // No cleanup ran: the first invocation's artifacts keep their raw names.
    assert!(dir.join("Polar_naca0012_Re1e4").is_file());
    assert!(dir.join(BL_TEMP_FILE).exists());
    assert!(!dir.join("naca0012.dat").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn overwrites_pre_existing_dat_file() {
    let dir = unique_temp_dir("pg_app_overwrite");
    fs::write(dir.join("naca0012.dat"), "stale").unwrap();
    let solver = RecordingSolver::new();

    run_batch(&solver, &naca0012_request(dir.clone())).unwrap();

    assert_eq!(
        fs::read_to_string(dir.join("naca0012.dat")).unwrap(),
        "coords for naca0012"
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn progress_reports_every_stage_in_order() {
    let dir = unique_temp_dir("pg_app_progress");
    let solver = RecordingSolver::new();

    let mut stages = Vec::new();
    let mut cb = |event: pg_app::BatchProgressEvent| stages.push(event.stage);
    run_batch_with_progress(&solver, &naca0012_request(dir.clone()), Some(&mut cb)).unwrap();

    assert!(matches!(stages[0], BatchStage::CheckingAirfoil));
    let polar_stages: Vec<(usize, usize)> = stages
        .iter()
        .filter_map(|s| match s {
            BatchStage::GeneratingPolar { index, total, .. } => Some((*index, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(polar_stages, vec![(1, 3), (2, 3), (3, 3)]);
    assert!(matches!(stages[stages.len() - 2], BatchStage::CleaningUp));
    assert!(matches!(stages[stages.len() - 1], BatchStage::Completed));

    fs::remove_dir_all(&dir).ok();
}
