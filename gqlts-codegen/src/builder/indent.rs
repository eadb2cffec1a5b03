//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Indentation described by Prettier's `tabWidth` / `useTabs` pair.
    pub fn from_prettier(tab_width: u8, use_tabs: bool) -> Self {
        if use_tabs {
            Self::Tab
        } else {
            Self::Spaces(tab_width)
        }
    }

    /// Write `level` indentation units into `out`.
    pub fn write(&self, out: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => {
                out.extend(std::iter::repeat_n(' ', level * usize::from(*width)));
            }
            Self::Tab => out.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indented(indent: Indent, level: usize) -> String {
        let mut out = String::new();
        indent.write(&mut out, level);
        out
    }

    #[test]
    fn test_write() {
        assert_eq!(indented(Indent::Spaces(2), 1), "  ");
        assert_eq!(indented(Indent::Spaces(4), 2), "        ");
        assert_eq!(indented(Indent::Spaces(3), 1), "   ");
        assert_eq!(indented(Indent::Tab, 2), "\t\t");
        assert_eq!(indented(Indent::Tab, 0), "");
    }

    #[test]
    fn test_from_prettier() {
        assert_eq!(Indent::from_prettier(2, false), Indent::TYPESCRIPT);
        assert_eq!(Indent::from_prettier(4, false), Indent::Spaces(4));
        assert_eq!(Indent::from_prettier(4, true), Indent::Tab);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
    }
}
