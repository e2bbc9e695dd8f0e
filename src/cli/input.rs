use anyhow::{Context, Result};
use std::io::BufRead;

/// Read test names one per line, skipping blank lines.
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for line in reader.lines() {
        let line = line.context("Failed to read test names")?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_names() {
        let input = Cursor::new("TestFoo\n\n  TestBar/baz  \r\n");
        assert_eq!(read_names(input).unwrap(), vec!["TestFoo", "TestBar/baz"]);
    }

    #[test]
    fn test_read_no_names() {
        assert!(read_names(Cursor::new("")).unwrap().is_empty());
    }
}
