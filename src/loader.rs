use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Reads a text file containing one Mersenne prime exponent per line.
///
/// Lines are trimmed before parsing. File order defines the index
/// assignment (line 1 becomes index 1). The input is trusted to be
/// ascending and duplicate-free; neither is validated here.
pub fn load_exponents<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::NotFound(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let mut exponents = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        let value: u64 = trimmed.parse().map_err(|_| Error::Parse {
            line: i + 1,
            value: trimmed.to_string(),
        })?;
        exponents.push(value);
    }

    log::debug!("Loaded {} exponents from {}", exponents.len(), path.display());

    Ok(exponents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp("mersenne_loader_valid.txt", "2\n3\n5\n7\n");
        let exponents = load_exponents(&path).unwrap();
        assert_eq!(exponents, vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let path = write_temp("mersenne_loader_ws.txt", "  2\n3 \n\t5\n");
        let exponents = load_exponents(&path).unwrap();
        assert_eq!(exponents, vec![2, 3, 5]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = load_exponents("/nonexistent/mersenne_primes.txt");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_non_integer_line_is_parse_error() {
        let path = write_temp("mersenne_loader_bad.txt", "2\nabc\n5\n");
        match load_exponents(&path) {
            Err(Error::Parse { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_blank_interior_line_is_parse_error() {
        let path = write_temp("mersenne_loader_blank.txt", "2\n\n5\n");
        assert!(matches!(
            load_exponents(&path),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_file_yields_empty_series() {
        let path = write_temp("mersenne_loader_empty.txt", "");
        assert_eq!(load_exponents(&path).unwrap(), Vec::<u64>::new());
    }
}
