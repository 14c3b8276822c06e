use crate::error::{PgError, PgResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix marking a parametric (4/5-digit series) airfoil identifier.
pub const NACA_PREFIX: &str = "naca";

/// Parsed airfoil identifier.
///
/// The parametric-vs-file decision is made once here, at parse time; no
/// downstream code inspects the raw string again. The prefix match is
/// case-sensitive: `NACA0012` names a coordinate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirfoilSpec {
    /// Parametric airfoil, e.g. `naca0012`. The full identifier is kept
    /// as given (XFOIL takes the digits, renaming takes the whole name).
    Naca(String),
    /// Coordinate file on disk, given with or without the `.dat` extension.
    CoordinateFile(PathBuf),
}

impl AirfoilSpec {
    /// Classify a raw identifier.
    pub fn parse(input: &str) -> PgResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PgError::InvalidArg {
                what: "airfoil identifier is empty",
            });
        }

        if trimmed.starts_with(NACA_PREFIX) {
            Ok(Self::Naca(trimmed.to_string()))
        } else {
            Ok(Self::CoordinateFile(PathBuf::from(trimmed)))
        }
    }

    pub fn is_parametric(&self) -> bool {
        matches!(self, Self::Naca(_))
    }

    /// Digits handed to XFOIL's `NACA` command (identifier minus prefix).
    pub fn naca_digits(&self) -> Option<&str> {
        match self {
            Self::Naca(code) => Some(&code[NACA_PREFIX.len()..]),
            Self::CoordinateFile(_) => None,
        }
    }

    /// Locate the coordinate file under `dir`, trying the name as given
    /// and with `.dat` appended. `None` for parametric airfoils or when
    /// neither candidate exists.
    pub fn resolve_coordinate_file(&self, dir: &Path) -> Option<PathBuf> {
        let path = match self {
            Self::Naca(_) => return None,
            Self::CoordinateFile(p) => p,
        };
        let direct = dir.join(path);
        if direct.is_file() {
            return Some(direct);
        }
        let mut with_ext = path.as_os_str().to_owned();
        with_ext.push(".dat");
        let with_ext = dir.join(with_ext);
        if with_ext.is_file() {
            return Some(with_ext);
        }
        None
    }

    /// Base name used when renaming generated artifacts: the identifier
    /// with any `.dat` extension stripped, so the renamed coordinate file
    /// is always `<stem>.dat` and never `<stem>.dat.dat`.
    pub fn output_stem(&self) -> String {
        match self {
            Self::Naca(code) => code.clone(),
            Self::CoordinateFile(path) => {
                let s = path.to_string_lossy();
                match s.strip_suffix(".dat") {
                    Some(stem) => stem.to_string(),
                    None => s.into_owned(),
                }
            }
        }
    }
}

impl fmt::Display for AirfoilSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naca(code) => write!(f, "{}", code),
            Self::CoordinateFile(path) => write!(f, "{}", path.display()),
        }
    }
}
