// Input selection: file, stdin or an interactive numbered menu.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::CliError;

/// Read the whole input text.
///
/// `None` and `-` read stdin; any other path must name an existing file.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        None => read_stdin(),
        Some(p) if p.as_os_str() == "-" => read_stdin(),
        Some(p) => read_file(p),
    }
}

fn read_stdin() -> Result<String, CliError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    debug!(bytes = text.len(), "read stdin");
    Ok(text)
}

/// Read a UTF-8 text file, reporting a missing file as [`CliError::FileNotFound`].
pub fn read_file(path: &Path) -> Result<String, CliError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            info!(path = %path.display(), bytes = text.len(), "read input file");
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CliError::FileNotFound(path.to_path_buf()))
        }
        Err(source) => Err(CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// The `*.txt` files of `dir`, sorted by name.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let entries = fs::read_dir(dir).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CliError::FileNotFound(dir.to_path_buf())
        } else {
            CliError::Read {
                path: dir.to_path_buf(),
                source,
            }
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(CliError::NoCandidates(dir.to_path_buf()));
    }
    Ok(files)
}

/// Show a numbered list of files and read the user's pick.
///
/// Anything other than one of the listed numbers is an
/// [`CliError::InvalidSelection`].
pub fn choose_file<R: BufRead, W: Write>(
    candidates: &[PathBuf],
    mut input: R,
    mut output: W,
) -> Result<PathBuf, CliError> {
    writeln!(output, "Choose the file to analyze:")?;
    for (i, path) in candidates.iter().enumerate() {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        writeln!(output, "{}. {}", i + 1, name)?;
    }
    match candidates.len() {
        1 => write!(output, "Enter 1: ")?,
        2 => write!(output, "Enter 1 or 2: ")?,
        n => write!(output, "Enter a number from 1 to {n}: ")?,
    }
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    let choice = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| candidates.get(i))
        .ok_or_else(|| CliError::InvalidSelection(answer.to_string()))?;
    debug!(choice = %choice.display(), "menu selection");
    Ok(choice.clone())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn two_files() -> Vec<PathBuf> {
        vec![
            PathBuf::from("samples/sample_text1.txt"),
            PathBuf::from("samples/sample_text2.txt"),
        ]
    }

    #[test]
    fn choose_valid_number() {
        let mut out = Vec::new();
        let chosen = choose_file(&two_files(), Cursor::new("2\n"), &mut out).unwrap();
        assert_eq!(chosen, PathBuf::from("samples/sample_text2.txt"));
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("1. sample_text1.txt"));
        assert!(shown.contains("2. sample_text2.txt"));
        assert!(shown.ends_with("Enter 1 or 2: "));
    }

    #[test]
    fn choose_rejects_out_of_range_and_garbage() {
        for answer in ["0\n", "3\n", "x\n", "\n", "-1\n"] {
            let err = choose_file(&two_files(), Cursor::new(answer), io::sink()).unwrap_err();
            assert!(
                matches!(err, CliError::InvalidSelection(_)),
                "answer {answer:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn choose_tolerates_whitespace() {
        let chosen = choose_file(&two_files(), Cursor::new("  1 \r\n"), io::sink()).unwrap();
        assert_eq!(chosen, PathBuf::from("samples/sample_text1.txt"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match read_input(Some(&missing)) {
            Err(CliError::FileNotFound(p)) => assert_eq!(p, missing),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        fs::write(&path, "very good").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "very good");
    }

    #[test]
    fn candidates_are_sorted_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = list_candidates(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn no_candidates() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            list_candidates(dir.path()),
            Err(CliError::NoCandidates(_))
        ));
    }
}
