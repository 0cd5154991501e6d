//! File-output dispatch for generated CNFs, matching
//! `gen_factor_sat/__main__.py::write_cnf`'s resolution rules: `-` (or no
//! flag at all) writes to stdout; an existing directory writes the
//! generator-specific default filename inside it; any other path is used
//! literally (its parent directories are created if missing).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;

use factor_sat_core::factoring::FactoringInstance;

pub fn resolve_output_path(outfile: Option<&str>, default_name: &str) -> Option<PathBuf> {
    match outfile {
        None | Some("-") => None,
        Some("") => Some(PathBuf::from(default_name)),
        Some(path) => {
            let path = Path::new(path);
            if path.is_dir() {
                Some(path.join(default_name))
            } else {
                Some(path.to_path_buf())
            }
        }
    }
}

pub fn write_cnf(instance: &FactoringInstance, comments: &[String], destination: Option<PathBuf>) -> io::Result<()> {
    match destination {
        None => instance.cnf.write_dimacs(io::stdout().lock(), comments),
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = fs::File::create(&path)?;
            instance.cnf.write_dimacs(file, comments)
        }
    }
}

pub fn default_filename_number(n: &BigUint) -> String {
    format!("factor_number{}.cnf", n)
}

pub fn default_filename_random(seed: u64, max_value: &BigUint) -> String {
    format!("factor_seed{}_maxn{}.cnf", seed, max_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_absent_mean_stdout() {
        assert_eq!(resolve_output_path(None, "default.cnf"), None);
        assert_eq!(resolve_output_path(Some("-"), "default.cnf"), None);
    }

    #[test]
    fn explicit_path_is_used_literally() {
        let resolved = resolve_output_path(Some("out/result.cnf"), "default.cnf");
        assert_eq!(resolved, Some(PathBuf::from("out/result.cnf")));
    }

    #[test]
    fn default_filenames_embed_the_number_and_seed() {
        let n = BigUint::from(91u32);
        assert_eq!(default_filename_number(&n), "factor_number91.cnf");
        assert_eq!(default_filename_random(7, &n), "factor_seed7_maxn91.cnf");
    }
}
