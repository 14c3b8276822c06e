//! Subprocess backend driving the real XFOIL binary.

use crate::artifacts::{coordinates_artifact_name, polar_artifact_name};
use crate::driver::{PolarJob, PolarSolver};
use crate::{XfoilError, XfoilResult};
use pg_core::AirfoilSpec;
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// XFOIL backend. Renders a command script and pipes it to the solver's
/// stdin, with the job's working directory as the process cwd.
pub struct XfoilProcess {
    binary: PathBuf,
}

impl XfoilProcess {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The name XFOIL's `LOAD` command gets, relative to the job cwd:
    /// the identifier as given if that file exists, otherwise with `.dat`
    /// appended.
    fn load_name(job: &PolarJob<'_>) -> XfoilResult<String> {
        let path = match job.airfoil {
            AirfoilSpec::Naca(_) => {
                return Err(XfoilError::CoordinatesMissing {
                    name: job.airfoil.to_string(),
                })
            }
            AirfoilSpec::CoordinateFile(p) => p,
        };
        if job.workdir.join(path).is_file() {
            return Ok(path.to_string_lossy().into_owned());
        }
        let with_ext = format!("{}.dat", path.to_string_lossy());
        if job.workdir.join(&with_ext).is_file() {
            return Ok(with_ext);
        }
        Err(XfoilError::CoordinatesMissing {
            name: job.airfoil.to_string(),
        })
    }

    /// Remove this job's `SAVE`/`PACC` target files if an earlier
    /// invocation (or a previous program run) left them behind. XFOIL
    /// prompts interactively when either target exists; the prompt would
    /// swallow the next script line and desync the whole session.
    fn remove_stale_artifacts(job: &PolarJob<'_>) -> XfoilResult<()> {
        let stem = job.airfoil.output_stem();
        let polar = job.workdir.join(polar_artifact_name(&stem, job.reynolds));
        if polar.exists() {
            fs::remove_file(&polar)?;
        }
        if job.airfoil.is_parametric() {
            let coords = job.workdir.join(coordinates_artifact_name(&stem));
            if coords.exists() {
                fs::remove_file(&coords)?;
            }
        }
        Ok(())
    }

    /// Render the stdin script for one job.
    ///
    /// Plotting stays disabled (`PLOP` / `G F`), the airfoil is selected
    /// parametrically or loaded from disk, then one viscous polar is
    /// accumulated over the whole AOA list at the job's Reynolds number.
    fn command_script(job: &PolarJob<'_>) -> XfoilResult<String> {
        let stem = job.airfoil.output_stem();
        let mut script = String::new();

        // Graphics off before anything draws.
        script.push_str("PLOP\nG F\n\n");

        match job.airfoil {
            AirfoilSpec::Naca(_) => {
                // naca_digits is Some for this variant by construction
                let digits = job.airfoil.naca_digits().unwrap_or_default();
                script.push_str(&format!("NACA {}\n", digits));
                // Parametric sections have no file on disk yet; save one
                // for the cleanup step to rename.
                script.push_str(&format!("SAVE {}\n", coordinates_artifact_name(&stem)));
            }
            AirfoilSpec::CoordinateFile(_) => {
                script.push_str(&format!("LOAD {}\n", Self::load_name(job)?));
            }
        }

        script.push_str("OPER\n");
        script.push_str(&format!("VISC {}\n", job.reynolds));
        script.push_str(&format!("ITER {}\n", job.iter_limit));
        script.push_str("PACC\n");
        script.push_str(&format!("{}\n", polar_artifact_name(&stem, job.reynolds)));
        // No dump file.
        script.push('\n');

        for alpha in job.alphas {
            script.push_str(&format!("ALFA {}\n", alpha));
        }

        // Close the accumulator, leave OPER, quit.
        script.push_str("PACC\n\nQUIT\n");
        Ok(script)
    }
}

impl PolarSolver for XfoilProcess {
    fn generate_polar(&self, job: &PolarJob<'_>) -> XfoilResult<()> {
        let script = Self::command_script(job)?;
        Self::remove_stale_artifacts(job)?;
        debug!(
            airfoil = %job.airfoil,
            reynolds = job.reynolds,
            points = job.alphas.len(),
            "spawning xfoil"
        );

        let mut child = Command::new(&self.binary)
            .current_dir(job.workdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| XfoilError::Spawn {
                binary: self.binary.to_string_lossy().into_owned(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(script.as_bytes())?;
        }
        // Dropping stdin closes the pipe; XFOIL runs the script to EOF.
        let status = child.wait()?;
        if !status.success() {
            return Err(XfoilError::Failed {
                status,
                reynolds: job.reynolds,
            });
        }
        Ok(())
    }
}
