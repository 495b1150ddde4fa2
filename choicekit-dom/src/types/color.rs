#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    /// Theme variable, resolved through a [`ColorContext`](super::ColorContext).
    Var(String),
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Mix(Color, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    /// Blend `amount` (0.0..=1.0) of `other` into this color.
    pub fn mix(self, other: Color, amount: f32) -> Self {
        self.with_op(ColorOp::Mix(other, amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Oklch { l, c, h } => format!("oklch({l}, {c}, {h})"),
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Var(name) => format!("${name}"),
            Self::Derived { base, ops } => {
                let mut s = base.to_dsl();
                for op in ops {
                    s.push_str(" | ");
                    s.push_str(&op.to_dsl());
                }
                s
            }
        }
    }
}

impl ColorOp {
    pub fn to_dsl(&self) -> String {
        match self {
            Self::Lighten(v) => format!("lighten({v})"),
            Self::Darken(v) => format!("darken({v})"),
            Self::Mix(color, amount) => format!("mix({}, {amount})", color.to_dsl()),
        }
    }
}

pub(crate) fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{Clamp, IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.clamp().into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

pub(crate) fn rgb_to_oklch(rgb: Rgb) -> (f32, f32, f32) {
    use palette::{FromColor, Oklch, Srgb};

    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
    let oklch = Oklch::from_color(srgb);
    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}
