//! Rendering evaluation results.

use std::io::{self, Write};

use crate::sim::VariantResult;

/// Write one line per variant: label, hit counts, and accuracy.
pub fn write_report(
    mut w: impl Write,
    results: &[VariantResult],
) -> io::Result<()> {
    for result in results {
        writeln!(
            w,
            "{:16} {}/{} correct ({:.2}%)",
            result.label,
            result.summary.correct,
            result.summary.attempted,
            result.summary.accuracy() * 100.0
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sim::Summary;

    #[test]
    fn one_line_per_variant_in_order() {
        let results = vec![
            VariantResult {
                label: "always-taken",
                summary: Summary {
                    correct: 3,
                    attempted: 4,
                },
            },
            VariantResult {
                label: "btb",
                summary: Summary {
                    correct: 1,
                    attempted: 2,
                },
            },
        ];

        let mut buf = Vec::new();
        write_report(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("always-taken"));
        assert!(lines[0].contains("3/4 correct (75.00%)"));
        assert!(lines[1].contains("1/2 correct (50.00%)"));
    }
}
