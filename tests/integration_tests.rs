use pair_finder::{run, OutputFormat, DEFAULT_SEQUENCE};
use std::io::{BufReader, Cursor, Write};
use tempfile::NamedTempFile;

fn run_text(input: &str) -> String {
    let mut output = Vec::new();
    run(
        OutputFormat::Text,
        &DEFAULT_SEQUENCE,
        &mut Cursor::new(input),
        &mut output,
    )
    .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_found_pairs_on_default_sequence() {
    assert_eq!(run_text("4\n"), "Found: indices 0 and 1, values 1 + 3 = 4\n");
    assert_eq!(run_text("13\n"), "Found: indices 4 and 5, values 6 + 7 = 13\n");
}

#[test]
fn test_missing_pairs_on_default_sequence() {
    assert_eq!(run_text("100\n"), "No pair sums to 100\n");
    assert_eq!(run_text("2"), "No pair sums to 2\n");
}

#[test]
fn test_absent_or_invalid_input_prints_nothing() {
    assert_eq!(run_text(""), "");
    assert_eq!(run_text("\n  \n"), "");
    assert_eq!(run_text("seven\n"), "");
}

#[test]
fn test_only_first_token_is_used() {
    assert_eq!(run_text("  9 4 13\n100\n"), "Found: indices 2 and 3, values 4 + 5 = 9\n");
}

#[test]
fn test_json_output() {
    let mut output = Vec::new();
    run(
        OutputFormat::Json,
        &DEFAULT_SEQUENCE,
        &mut Cursor::new("13"),
        &mut output,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["target"], 13);
    assert_eq!(value["found"], true);
    assert_eq!(value["indices"], serde_json::json!([4, 5]));
    assert_eq!(value["values"], serde_json::json!([6, 7]));
}

#[test]
fn test_reads_target_from_file_handle() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "\n11").unwrap();
    file.flush().unwrap();

    let mut reader = BufReader::new(file.reopen().unwrap());
    let mut output = Vec::new();
    run(OutputFormat::Text, &DEFAULT_SEQUENCE, &mut reader, &mut output).unwrap();

    // 5 + 6 completes before 4 + 7
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Found: indices 3 and 4, values 5 + 6 = 11\n"
    );
}

#[test]
fn test_write_failure_is_reported() {
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let result = run(
        OutputFormat::Text,
        &DEFAULT_SEQUENCE,
        &mut Cursor::new("4"),
        &mut FailingWriter,
    );

    assert!(matches!(result, Err(pair_finder::PairError::IoError(_))));
}

#[test]
fn test_invalid_utf8_input() {
    let mut output = Vec::new();
    run(
        OutputFormat::Text,
        &DEFAULT_SEQUENCE,
        &mut Cursor::new(&b"\xff\n"[..]),
        &mut output,
    )
    .unwrap();
    assert!(output.is_empty());

    let mut output = Vec::new();
    run(
        OutputFormat::Text,
        &DEFAULT_SEQUENCE,
        &mut Cursor::new(&b"4 \xff\n"[..]),
        &mut output,
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Found: indices 0 and 1, values 1 + 3 = 4\n"
    );
}

#[test]
fn test_read_failure_is_reported() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "stdin closed"))
        }
    }

    let mut output = Vec::new();
    let result = run(
        OutputFormat::Text,
        &DEFAULT_SEQUENCE,
        &mut BufReader::new(FailingReader),
        &mut output,
    );

    assert!(matches!(result, Err(pair_finder::PairError::IoError(_))));
    assert!(output.is_empty());
}
