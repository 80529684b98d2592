//! Static font-metric tables for the two PDF builtin fonts the renderer uses.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard Adobe AFM tables for Helvetica and Helvetica-Bold. The renderer
//! only needs them for greedy word-wrap, so an em-unit approximation is
//! exact enough: the wrap point and the engine's glyph placement come from
//! the same tables the PDF viewer uses for builtin fonts.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

/// The builtin font faces available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Helvetica,
    HelveticaBold,
}

/// Static character-width table for one font face.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units at 1em.
/// Non-ASCII characters fall back to `average_char_width`.
pub struct FontMetricTable {
    pub face: Face,
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap at `max_width_em`, returning the wrapped lines.
    ///
    /// A single word wider than the limit gets a line of its own rather than
    /// being split mid-word. Empty or whitespace-only input yields no lines.
    pub fn wrap(&self, text: &str, max_width_em: f32) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + self.space_width + word_w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Helvetica — standard AFM widths (units/1000 → em).
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: Face::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.536,
    space_width: 0.278,
};

/// Helvetica-Bold — standard AFM widths (units/1000 → em).
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: Face::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.562,
    space_width: 0.278,
};

/// Returns the static metric table for a font face.
pub fn get_metrics(face: Face) -> &'static FontMetricTable {
    match face {
        Face::Helvetica => &HELVETICA_TABLE,
        Face::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(Face::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(Face::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(Face::Helvetica);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_bold_face_measures_wider() {
        let regular = get_metrics(Face::Helvetica);
        let bold = get_metrics(Face::HelveticaBold);
        let text = "Professional Experience";
        assert!(bold.measure_str(text) > regular.measure_str(text));
    }

    #[test]
    fn test_wrap_empty_yields_no_lines() {
        let metrics = get_metrics(Face::Helvetica);
        assert!(metrics.wrap("", 40.0).is_empty());
        assert!(metrics.wrap("   ", 40.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let metrics = get_metrics(Face::Helvetica);
        let lines = metrics.wrap("Prabhas Mahanti", 40.0);
        assert_eq!(lines, vec!["Prabhas Mahanti".to_string()]);
    }

    #[test]
    fn test_wrap_long_text_breaks_and_preserves_words() {
        let metrics = get_metrics(Face::Helvetica);
        let text = "word ".repeat(50);
        let lines = metrics.wrap(&text, 10.0);
        assert!(lines.len() > 1);
        // Re-joining the lines recovers the original word sequence.
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.trim());
        // No line exceeds the limit (each word fits well under 10em).
        for line in &lines {
            assert!(metrics.measure_str(line) <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_wrap_oversized_word_gets_its_own_line() {
        let metrics = get_metrics(Face::Helvetica);
        let long_word = "x".repeat(200);
        let lines = metrics.wrap(&format!("short {long_word} tail"), 10.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], long_word);
    }
}
