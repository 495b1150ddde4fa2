use super::{oklch_to_rgb, rgb_to_oklch, Color, ColorOp, Rgb};

/// Variables deeper than this are treated as unresolved (guards against cycles).
const MAX_VAR_DEPTH: usize = 16;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Minimal default theme providing basic readable colors.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub muted: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::Oklch { l: 0.0, c: 0.0, h: 0.0 },
            foreground: Color::Oklch { l: 1.0, c: 0.0, h: 0.0 },
            primary: Color::Oklch { l: 0.9, c: 0.0, h: 0.0 },
            muted: Color::Oklch { l: 0.5, c: 0.0, h: 0.0 },
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "primary" => Some(&self.primary),
            "muted" => Some(&self.muted),
            _ => None,
        }
    }
}

/// Resolves variables and derived colors against a theme.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve any color down to a terminal RGB triple.
    /// Unknown variables resolve to black.
    pub fn to_rgb(&self, color: &Color) -> Rgb {
        self.resolve_depth(color, 0)
    }

    fn resolve_depth(&self, color: &Color, depth: usize) -> Rgb {
        match color {
            Color::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Color::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Color::Var(name) => {
                if depth >= MAX_VAR_DEPTH {
                    log::warn!("color variable '{name}' nests too deeply, using black");
                    return Rgb::default();
                }
                match self.theme.resolve(name) {
                    Some(resolved) => self.resolve_depth(resolved, depth + 1),
                    None => {
                        log::trace!("unresolved color variable '{name}'");
                        Rgb::default()
                    }
                }
            }
            Color::Derived { base, ops } => {
                let base_rgb = self.resolve_depth(base, depth + 1);
                let (mut l, mut c, mut h) = rgb_to_oklch(base_rgb);

                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => {
                            l = (l + amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Darken(amount) => {
                            l = (l - amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Mix(other, amount) => {
                            let other_rgb = self.resolve_depth(other, depth + 1);
                            let (ol, oc, oh) = rgb_to_oklch(other_rgb);
                            let amount = amount.clamp(0.0, 1.0);
                            l = l * (1.0 - amount) + ol * amount;
                            c = c * (1.0 - amount) + oc * amount;
                            // Achromatic colors carry no meaningful hue.
                            h = if c < 1e-4 {
                                h
                            } else {
                                mix_hue(h, oh, amount)
                            };
                        }
                    }
                }

                oklch_to_rgb(l, c, h)
            }
        }
    }
}

fn mix_hue(from: f32, to: f32, amount: f32) -> f32 {
    let diff = to - from;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    (from + diff * amount).rem_euclid(360.0)
}
