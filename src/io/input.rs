use std::path::Path;

use super::TranscriptIoError;

/// Read a text file and split it into utterances, one per non-blank line
pub fn read_utterances(path: &Path) -> Result<Vec<String>, TranscriptIoError> {
    let content = std::fs::read_to_string(path).map_err(|source| TranscriptIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_utterances(&content))
}

/// Split text into utterances, one per non-blank line, trimmed
pub fn split_utterances(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_utterances() {
        let text = "Carles li reis,\n\n  nostre emperere magnes  \n";
        assert_eq!(
            split_utterances(text),
            vec!["Carles li reis,", "nostre emperere magnes"]
        );
    }

    #[test]
    fn test_read_utterances() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Dient paien:").unwrap();
        writeln!(file, "«Issi»").unwrap();

        let utterances = read_utterances(file.path()).unwrap();
        assert_eq!(utterances, vec!["Dient paien:", "«Issi»"]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_utterances(Path::new("/nonexistent/chanson.txt")).unwrap_err();
        assert!(matches!(err, TranscriptIoError::Read { .. }));
    }
}
