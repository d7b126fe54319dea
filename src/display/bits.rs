//! Bit-layout table rendering
//!
//! Renders a non-negative whole number as a hex line, a zero-padded binary
//! line, a bit-width line, and a nibble-grouped index/value table. The
//! binary digits always run MSB→LSB left-to-right; the endian mode controls
//! only the direction of the index labels (bit 0 is always the LSB).

use crate::calculator::messages::Language;

/// Byte-order display mode, persistent across lines within one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndianMode {
    #[default]
    Disabled,
    /// Index labels ascend left-to-right (0 at the MSB position).
    Little,
    /// Index labels descend left-to-right (width-1 at the MSB position).
    Big,
}

/// Render the bit-display block for `value`.
///
/// Returns `None` when the mode is [`EndianMode::Disabled`] or the value is
/// negative. Bit width is the smallest multiple of 8 that holds the value,
/// with a minimum of 8 for zero.
pub fn bit_display(
    value: i64,
    mode: EndianMode,
    language: Language,
) -> Option<String> {
    if value < 0 || mode == EndianMode::Disabled {
        return None;
    }

    let bit_len = 64 - (value as u64).leading_zeros() as usize;
    let bit_count = if value == 0 { 8 } else { (bit_len + 7) / 8 * 8 };

    let bin_str = format!("{:0width$b}", value, width = bit_count);
    let bits: Vec<char> = bin_str.chars().collect();

    let mut lines = Vec::new();
    match language {
        Language::Zh => {
            lines.push(format!("  十六进制: 0x{:X}", value));
            lines.push(format!("  二进制: 0b{}", bin_str));
            lines.push(format!(
                "  位数: {} bits ({} bytes)",
                bit_count,
                bit_count / 8
            ));
            lines.push(match mode {
                EndianMode::Little => "  位索引 (小端字节序):".to_string(),
                _ => "  位索引 (大端字节序):".to_string(),
            });
        }
        Language::En => {
            lines.push(format!("  Hex: 0x{:X}", value));
            lines.push(format!("  Binary: 0b{}", bin_str));
            lines.push(format!(
                "  Width: {} bits ({} bytes)",
                bit_count,
                bit_count / 8
            ));
            lines.push(match mode {
                EndianMode::Little => {
                    "  Bit indices (little endian):".to_string()
                }
                _ => "  Bit indices (big endian):".to_string(),
            });
        }
    }

    // nibble groups, rendered MSB-first; each group is padded to the width
    // of its widest index label
    let mut index_row = String::new();
    let mut bit_row = String::new();

    for group in (0..bit_count).step_by(4) {
        let indices: Vec<String> = (0..4)
            .map(|j| match mode {
                EndianMode::Little => group + j,
                _ => bit_count - 1 - group - j,
            })
            .map(|idx| idx.to_string())
            .collect();
        let width = indices.iter().map(String::len).max().unwrap_or(1);

        index_row.push('|');
        index_row.push_str(
            &indices
                .iter()
                .map(|idx| format!("{:>w$}", idx, w = width))
                .collect::<Vec<_>>()
                .join(" "),
        );
        index_row.push(' ');

        bit_row.push('|');
        bit_row.push_str(
            &(0..4)
                .map(|j| format!("{:^w$}", bits[group + j], w = width))
                .collect::<Vec<_>>()
                .join(" "),
        );
        bit_row.push(' ');
    }
    index_row.push('|');
    bit_row.push('|');

    lines.push(format!("    {}", index_row));
    lines.push(format!("    {}", bit_row));

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_and_negative_return_none() {
        assert!(bit_display(255, EndianMode::Disabled, Language::En).is_none());
        assert!(bit_display(-1, EndianMode::Little, Language::En).is_none());
    }

    #[test]
    fn test_little_endian_byte() {
        let block =
            bit_display(0xFF, EndianMode::Little, Language::En).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "  Hex: 0xFF");
        assert_eq!(lines[1], "  Binary: 0b11111111");
        assert_eq!(lines[2], "  Width: 8 bits (1 bytes)");
        assert_eq!(lines[3], "  Bit indices (little endian):");
        assert_eq!(lines[4], "    |0 1 2 3 |4 5 6 7 |");
        assert_eq!(lines[5], "    |1 1 1 1 |1 1 1 1 |");
    }

    #[test]
    fn test_big_endian_byte() {
        let block = bit_display(0xFF, EndianMode::Big, Language::En).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[4], "    |7 6 5 4 |3 2 1 0 |");
        assert_eq!(lines[5], "    |1 1 1 1 |1 1 1 1 |");
    }

    #[test]
    fn test_zero_uses_eight_bits() {
        let block = bit_display(0, EndianMode::Little, Language::En).unwrap();
        assert!(block.contains("0b00000000"));
        assert!(block.contains("8 bits (1 bytes)"));
    }

    #[test]
    fn test_two_byte_value_widths() {
        // 0x1FF needs 9 bits, so the table widens to 16 and two-digit
        // indices pad their whole nibble group
        let block =
            bit_display(0x1FF, EndianMode::Little, Language::En).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[2], "  Width: 16 bits (2 bytes)");
        assert_eq!(
            lines[4],
            "    |0 1 2 3 |4 5 6 7 | 8  9 10 11 |12 13 14 15 |"
        );
        assert_eq!(
            lines[5],
            "    |0 0 0 0 |0 0 0 1 |1  1  1  1  |1  1  1  1  |"
        );
    }
}
