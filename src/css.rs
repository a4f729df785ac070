//! Parse and write colors in CSS syntax.
//! <https://drafts.csswg.org/css-color-4/#color-syntax>
//!
//! Spaces without a CSS function or predefined `color()` name are written
//! with a dashed identifier, e.g. `color(--jzazbz 0.1 0.2 0.3)`, and parsed
//! back from it.

use std::{fmt, str::FromStr};

use cssparser::{
    color::{parse_hash_color, parse_named_color},
    match_ignore_ascii_case, ParseError, Parser, ParserInput, Token,
};

use crate::{
    color::{Color, Component, MAX_COMPONENTS},
    error::{Error, Result},
    math::wrap_degrees,
    space::Space,
};

/// Spaces that CSS names in the `color()` function.
const PREDEFINED: [Space; 8] = [
    Space::Srgb,
    Space::SrgbLinear,
    Space::DisplayP3,
    Space::A98Rgb,
    Space::ProPhotoRgb,
    Space::Rec2020,
    Space::XyzD50,
    Space::XyzD65,
];

type ParseResult<'i, T> = std::result::Result<T, ParseError<'i, ()>>;

/// How one component of a color function is read.
#[derive(Clone, Copy)]
enum Kind {
    /// An sRGB channel: a number in `[0, 255]` or a percentage.
    Byte,
    /// A percentage, or a number where 100 is 100%, clamped to `[0, 1]`.
    Fraction,
    /// A number, or a percentage of the given value.
    Number(Component),
    /// An angle, wrapped into `[0, 360)`.
    Hue,
}

fn parse_value<'i>(input: &mut Parser<'i, '_>, kind: Kind) -> ParseResult<'i, Option<Component>> {
    let location = input.current_source_location();
    let token = input.next()?.clone();

    let value = match (&token, kind) {
        (Token::Ident(ident), _) if ident.eq_ignore_ascii_case("none") => return Ok(None),

        (Token::Number { value, .. }, Kind::Byte) => {
            (*value as Component).round().clamp(0.0, 255.0) / 255.0
        }
        (Token::Percentage { unit_value, .. }, Kind::Byte | Kind::Fraction) => {
            (*unit_value as Component).clamp(0.0, 1.0)
        }
        (Token::Number { value, .. }, Kind::Fraction) => {
            (*value as Component / 100.0).clamp(0.0, 1.0)
        }
        (Token::Number { value, .. }, Kind::Number(_)) => *value as Component,
        (Token::Percentage { unit_value, .. }, Kind::Number(hundred)) => {
            *unit_value as Component * hundred
        }
        (Token::Number { value, .. }, Kind::Hue) => wrap_degrees(*value as Component),
        (Token::Dimension { value, unit, .. }, Kind::Hue) => {
            let value = *value as Component;
            let degrees = match_ignore_ascii_case! { unit,
                "deg" => value,
                "grad" => value * 0.9,
                "rad" => value.to_degrees(),
                "turn" => value * 360.0,
                _ => return Err(location.new_unexpected_token_error(token.clone())),
            };
            wrap_degrees(degrees)
        }

        _ => return Err(location.new_unexpected_token_error(token.clone())),
    };

    Ok(Some(value))
}

/// Alpha as a number or percentage clamped to `[0, 1]`, or `none`.
fn parse_alpha<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, Option<Component>> {
    Ok(parse_value(input, Kind::Number(1.0))?.map(|alpha| alpha.clamp(0.0, 1.0)))
}

/// An optional `/ alpha`. A color without one is opaque.
fn parse_slash_alpha<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, Option<Component>> {
    if input.try_parse(|input| input.expect_delim('/')).is_ok() {
        parse_alpha(input)
    } else {
        Ok(Some(1.0))
    }
}

/// Three components and alpha, space separated, or comma separated when
/// `legacy` is set and a comma follows the first component.
fn parse_arguments<'i>(
    input: &mut Parser<'i, '_>,
    kinds: [Kind; 3],
    legacy: bool,
) -> ParseResult<'i, ([Option<Component>; 3], Option<Component>)> {
    let first = parse_value(input, kinds[0])?;
    let commas = legacy && input.try_parse(|input| input.expect_comma()).is_ok();

    let second = parse_value(input, kinds[1])?;
    if commas {
        input.expect_comma()?;
    }
    let third = parse_value(input, kinds[2])?;

    let alpha = if !commas {
        parse_slash_alpha(input)?
    } else if input.try_parse(|input| input.expect_comma()).is_ok() {
        parse_alpha(input)?
    } else {
        Some(1.0)
    };

    Ok(([first, second, third], alpha))
}

fn parse_color_function<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, Color> {
    let location = input.current_source_location();
    let ident = input.expect_ident()?.clone();

    let space = match ident.strip_prefix("--") {
        Some(custom) => custom.parse::<Space>().ok(),
        None => ident
            .parse::<Space>()
            .ok()
            .filter(|space| PREDEFINED.contains(space)),
    };
    let Some(space) = space else {
        return Err(location.new_unexpected_token_error(Token::Ident(ident)));
    };

    let components = space.descriptor().components;
    let predefined = PREDEFINED.contains(&space);

    let mut values = [None; MAX_COMPONENTS];
    for (value, info) in values.iter_mut().zip(components) {
        let kind = match info.circular {
            true => Kind::Hue,
            false if predefined => Kind::Number(1.0),
            false => Kind::Number(info.max),
        };
        *value = parse_value(input, kind)?;
    }
    let alpha = parse_slash_alpha(input)?;

    Ok(Color::from_values(space, &values[..components.len()], alpha))
}

fn parse_function<'i>(name: &str, input: &mut Parser<'i, '_>) -> ParseResult<'i, Color> {
    use Kind::*;

    let (space, kinds, legacy) = match_ignore_ascii_case! { name,
        "rgb" | "rgba" => (Space::Srgb, [Byte, Byte, Byte], true),
        "hsl" | "hsla" => (Space::Hsl, [Hue, Fraction, Fraction], true),
        "hwb" => (Space::Hwb, [Hue, Fraction, Fraction], false),
        "lab" => (Space::Lab, [Number(100.0), Number(125.0), Number(125.0)], false),
        "lch" => (Space::Lch, [Number(100.0), Number(150.0), Hue], false),
        "oklab" => (Space::Oklab, [Number(1.0), Number(0.4), Number(0.4)], false),
        "oklch" => (Space::Oklch, [Number(1.0), Number(0.4), Hue], false),
        "color" => return parse_color_function(input),
        _ => return Err(input.new_custom_error(())),
    };

    let (values, alpha) = parse_arguments(input, kinds, legacy)?;
    Ok(Color::from_values(space, &values, alpha))
}

fn parse_color<'i>(input: &mut Parser<'i, '_>) -> ParseResult<'i, Color> {
    let location = input.current_source_location();
    let token = input.next()?.clone();

    let srgb = |(r, g, b): (u8, u8, u8), alpha: Component| {
        let unit = |channel: u8| channel as Component / 255.0;
        Color::new(Space::Srgb, unit(r), unit(g), unit(b), alpha)
    };

    match token {
        Token::Hash(ref value) | Token::IDHash(ref value) => parse_hash_color(value.as_bytes())
            .map(|(r, g, b, alpha)| srgb((r, g, b), alpha as Component))
            .map_err(|()| location.new_unexpected_token_error(token.clone())),
        Token::Ident(ref name) if name.eq_ignore_ascii_case("transparent") => {
            Ok(srgb((0, 0, 0), 0.0))
        }
        Token::Ident(ref name) => parse_named_color(name)
            .map(|rgb| srgb(rgb, 1.0))
            .map_err(|()| location.new_unexpected_token_error(token.clone())),
        Token::Function(ref name) => {
            let name = name.clone();
            input.parse_nested_block(|input| parse_function(&name, input))
        }
        _ => Err(location.new_unexpected_token_error(token.clone())),
    }
}

impl Color {
    /// Parse a CSS color: a named color, a hex color, or one of the `rgb()`,
    /// `hsl()`, `hwb()`, `lab()`, `lch()`, `oklab()`, `oklch()` and
    /// `color()` functions. `none` gives a missing component.
    ///
    /// ```rust
    /// use chromata::{Color, Space};
    /// let color = Color::from_css("oklch(70% 0.1 none / 50%)").unwrap();
    /// assert_eq!(color.space(), Space::Oklch);
    /// assert_eq!(color.c2(), None);
    /// assert_eq!(color.alpha(), Some(0.5));
    /// ```
    pub fn from_css(css: &str) -> Result<Color> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parser.parse_entirely(parse_color).map_err(|err| {
            tracing::debug!(css, ?err, "invalid CSS color");
            Error::InvalidCss(css.to_string())
        })
    }

    /// Write this color in CSS syntax with the default [`CssFormat`].
    pub fn to_css_string(&self) -> String {
        self.format_css(&CssFormat::default())
    }

    /// Write this color in CSS syntax.
    ///
    /// sRGB, HSL, HWB, Lab, LCH, Oklab and Oklch use their CSS functions.
    /// Every other space uses `color()`.
    pub fn format_css(&self, format: &CssFormat) -> String {
        let [c0, c1, c2, c3] = std::array::from_fn(|index| self.component(index));

        let number = |value: Option<Component>| value.map_or_else(none, format_number);
        let percent = |value: Option<Component>, hundred: Component| {
            value.map_or_else(none, |value| {
                format!("{}%", format_number(value / hundred * 100.0))
            })
        };
        let hue = |value: Option<Component>| value.map_or_else(none, |h| format.hue_unit.format(h));

        let (name, components, commas) = match self.space() {
            Space::Srgb => {
                let channel = |value: Option<Component>| match value {
                    Some(value) if !format.units_percent => {
                        ((value * 255.0).round().clamp(0.0, 255.0) as u8).to_string()
                    }
                    value => percent(value, 1.0),
                };
                (
                    if format.legacy_name { "rgba" } else { "rgb" },
                    vec![channel(c0), channel(c1), channel(c2)],
                    format.legacy_format,
                )
            }
            Space::Hsl => (
                if format.legacy_name { "hsla" } else { "hsl" },
                vec![hue(c0), percent(c1, 1.0), percent(c2, 1.0)],
                format.legacy_format,
            ),
            Space::Hwb => ("hwb", vec![hue(c0), percent(c1, 1.0), percent(c2, 1.0)], false),
            Space::Lab => ("lab", vec![percent(c0, 100.0), number(c1), number(c2)], false),
            Space::Lch => ("lch", vec![percent(c0, 100.0), number(c1), hue(c2)], false),
            Space::Oklab => ("oklab", vec![percent(c0, 1.0), number(c1), number(c2)], false),
            Space::Oklch => ("oklch", vec![percent(c0, 1.0), number(c1), hue(c2)], false),
            space => {
                let predefined = PREDEFINED.contains(&space);
                let ident = if predefined {
                    space.name().to_string()
                } else {
                    format!("--{}", space.name())
                };

                let descriptor = space.descriptor();
                let values = descriptor
                    .components
                    .iter()
                    .zip([c0, c1, c2, c3])
                    .map(|(info, value)| match info.circular {
                        true => hue(value),
                        false if format.units_percent => {
                            percent(value, if predefined { 1.0 } else { info.max })
                        }
                        false => number(value),
                    });

                (
                    "color",
                    std::iter::once(ident).chain(values).collect(),
                    false,
                )
            }
        };

        let mut css = format!(
            "{name}({}",
            components.join(if commas { ", " } else { " " })
        );
        if let Some(alpha) = format.alpha.format(self.alpha(), format.alpha_percent) {
            css.push_str(if commas { ", " } else { " / " });
            css.push_str(&alpha);
        }
        css.push(')');
        css
    }
}

fn none() -> String {
    String::from("none")
}

/// At most four decimals, without trailing zeros.
fn format_number(value: Component) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        String::from("0")
    } else {
        text.to_string()
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_css(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

/// The unit hues are written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnit {
    /// Degrees, without a unit.
    #[default]
    Auto,
    /// Degrees, with the `deg` unit.
    Degrees,
    /// Radians.
    Radians,
    /// Gradians, 400 to a full turn.
    Gradians,
    /// Turns.
    Turns,
}

impl AngleUnit {
    fn format(self, degrees: Component) -> String {
        match self {
            Self::Auto => format_number(degrees),
            Self::Degrees => format!("{}deg", format_number(degrees)),
            Self::Radians => format!("{}rad", format_number(degrees.to_radians())),
            Self::Gradians => format!("{}grad", format_number(degrees / 0.9)),
            Self::Turns => format!("{}turn", format_number(degrees / 360.0)),
        }
    }
}

/// When the alpha of a color is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderCondition {
    /// Always; a missing alpha is written as 1.
    Always,
    /// Never.
    Never,
    /// Only when the alpha is present and not 1.
    #[default]
    Auto,
}

impl RenderCondition {
    fn format(self, alpha: Option<Component>, percent: bool) -> Option<String> {
        let alpha = match (self, alpha) {
            (Self::Always, alpha) => alpha.unwrap_or(1.0),
            (Self::Auto, Some(alpha)) if alpha != 1.0 => alpha,
            _ => return None,
        };

        Some(if percent {
            format!("{}%", format_number(alpha * 100.0))
        } else {
            format_number(alpha)
        })
    }
}

/// Options for [`Color::format_css`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CssFormat {
    /// The unit hues are written in.
    pub hue_unit: AngleUnit,
    /// When to write the alpha.
    pub alpha: RenderCondition,
    /// Write sRGB channels and `color()` components as percentages.
    pub units_percent: bool,
    /// Write the alpha as a percentage.
    pub alpha_percent: bool,
    /// Use the `rgba` and `hsla` function names.
    pub legacy_name: bool,
    /// Separate the arguments of `rgb()` and `hsl()` with commas.
    pub legacy_format: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn parse(css: &str) -> Color {
        Color::from_css(css).unwrap()
    }

    fn assert_color(css: &str, space: Space, expected: [Component; 3], alpha: Component) {
        let color = parse(css);
        assert_eq!(color.space(), space, "{css}");
        for (value, expected) in color.values().iter().zip(expected) {
            assert_component_eq!(*value, expected, 1.0e-4);
        }
        assert_component_eq!(color.alpha().unwrap(), alpha, 1.0e-6);
    }

    fn srgb255(r: u8, g: u8, b: u8) -> [Component; 3] {
        [r, g, b].map(|c| c as Component / 255.0)
    }

    #[test]
    fn named() {
        assert_color("rebeccapurple", Space::Srgb, srgb255(0x66, 0x33, 0x99), 1.0);
        assert_color("RebeccaPurple", Space::Srgb, srgb255(0x66, 0x33, 0x99), 1.0);
        assert_color("transparent", Space::Srgb, [0.0; 3], 0.0);
    }

    #[test]
    fn invalid() {
        let cases = [
            "",
            "foo",
            "#ff",
            "#ffg",
            "#12345",
            "#1122334",
            "#112233445",
            "rgb (1,2,3)",
            "rgb(1,2,#abc)",
            "rgb(1deg,2,3)",
            "rgb(1grad,2,3)",
            "rgb(1rad,2,3)",
            "rgb(1turn,2,3)",
            "rgb(1,2,3,4,5)",
            "rgb(1,2 3)",
            "rgb(1 2,3)",
            "rgb(1 2 3, 4)",
            "rgb(1,2,3 / 4)",
            "rgb(1,2,3 4)",
            "hsl(1%,2%,3%)",
            "hsl(1degrees,2%,3%)",
            "hsl(1ddeg,2%,3%)",
            "lab(1, 2, 3)",
            "color(profoto-rgb 0.4835 0.9167 0.2188)",
            "color(hsl 0 0.5 0.5)",
            "color(srgb 0.1 0.2)",
            "rgb(1 2 3) red",
        ];

        for css in cases {
            assert_eq!(
                Color::from_css(css),
                Err(Error::InvalidCss(css.to_string())),
                "{css}"
            );
        }
    }

    #[test]
    fn clamp() {
        assert_color("rgb(-1,2,3)", Space::Srgb, srgb255(0, 2, 3), 1.0);
        assert_color("rgb(256,2,3)", Space::Srgb, srgb255(255, 2, 3), 1.0);
        assert_color("rgb(1,2,3,-1)", Space::Srgb, srgb255(1, 2, 3), 0.0);
        assert_color("rgb(100%, 200%, 300%)", Space::Srgb, [1.0; 3], 1.0);
        assert_color("hsl(1,-2%,3%)", Space::Hsl, [1.0, 0.0, 0.03], 1.0);
        assert_color("hsl(1,2%,3%,-4%)", Space::Hsl, [1.0, 0.02, 0.03], 0.0);
    }

    #[test]
    fn rgb() {
        let cases = [
            "#f09",
            "#F09",
            "#ff0099",
            "#FF0099",
            "rgb(255,0,153)",
            "rgb(255, 0, 153)",
            "rgb(255, 0, 153.0)",
            "rgb(100%,0%,60%)",
            "rgb(100%, 0%, 60%)",
            "rgb(255 0 153)",
            "  rgb(255 0 153)  ",
            "RGB(255 0 153 / 1)",
        ];
        for css in cases {
            assert_color(css, Space::Srgb, srgb255(255, 0, 153), 1.0);
        }

        assert_color("rgba(51, 170, 50.6, 1)", Space::Srgb, srgb255(51, 170, 51), 1.0);
        assert_color("rgb(1e2, .5e1, .5e0, +.25e2%)", Space::Srgb, srgb255(100, 5, 1), 0.25);
    }

    #[test]
    fn alpha() {
        let cases = [
            ("#3a3", 1.0),
            ("#3a30", 0.0),
            ("#33aa3380", 0x80 as Component / 255.0),
            ("rgba(51, 170, 51, .4)", 0.4),
            ("rgba(51 170 51 / 0.4)", 0.4),
            ("rgba(51 170 51 / 40%)", 0.4),
        ];
        for (css, alpha) in cases {
            assert_color(css, Space::Srgb, srgb255(0x33, 0xaa, 0x33), alpha);
        }

        assert_eq!(parse("rgb(51 170 51 / none)").alpha(), None);
    }

    #[test]
    fn hsl() {
        let cases = [
            ("hsl(270,60%,70%)", [270.0, 0.6, 0.7], 1.0),
            ("hsl(270 60% 70%)", [270.0, 0.6, 0.7], 1.0),
            ("hsl(270 60 70)", [270.0, 0.6, 0.7], 1.0),
            ("hsl(4.71239rad, 60%, 70%)", [270.0, 0.6, 0.7], 1.0),
            ("hsl(.75turn, 60%, 70%)", [270.0, 0.6, 0.7], 1.0),
            ("hsl(270, 60%, 50%, 15%)", [270.0, 0.6, 0.5], 0.15),
            ("hsla(240 100% 50% / .05)", [240.0, 1.0, 0.5], 0.05),
        ];
        for (css, expected, alpha) in cases {
            assert_color(css, Space::Hsl, expected, alpha);
        }
    }

    #[test]
    fn hue_units() {
        let cases = [
            ("90", 90.0),
            ("1170", 90.0),
            ("90deg", 90.0),
            ("90DEG", 90.0),
            ("100grad", 90.0),
            ("0.25turn", 90.0),
            ("1.5708rad", 90.0),
            ("-90", 270.0),
            ("-100grad", 270.0),
            ("-0.25turn", 270.0),
            ("-1.5708rad", 270.0),
            ("0turn", 0.0),
        ];
        for (angle, degrees) in cases {
            let color = parse(&format!("hsl({angle}, 0%, 0%)"));
            assert_component_eq!(color.c0().unwrap(), degrees, 1.0e-3);
        }

        assert_eq!(parse("hsl(none 0% 0%)").c0(), None);
    }

    #[test]
    fn lab_and_lch() {
        assert_color(
            "lab(29.2345% 39.3825 20.0664)",
            Space::Lab,
            [29.2345, 39.3825, 20.0664],
            1.0,
        );
        assert_color("lab(50 50% -100%)", Space::Lab, [50.0, 62.5, -125.0], 1.0);
        assert_color("lch(52.2345% 72.2 56.2)", Space::Lch, [52.2345, 72.2, 56.2], 1.0);
        assert_color("lch(50% 100% 400)", Space::Lch, [50.0, 150.0, 40.0], 1.0);
    }

    #[test]
    fn hwb() {
        assert_color("hwb(180 0% 0%)", Space::Hwb, [180.0, 0.0, 0.0], 1.0);
        assert_color("hwb(200grad 23.4% 45.6%)", Space::Hwb, [180.0, 0.234, 0.456], 1.0);
    }

    #[test]
    fn oklab_and_oklch() {
        assert_color(
            "oklab(40.101%  0.1147  0.0453)",
            Space::Oklab,
            [0.40101, 0.1147, 0.0453],
            1.0,
        );
        assert_color(
            "oklab(51.975% -35.075% 26.92%)",
            Space::Oklab,
            [0.51975, -0.1403, 0.10768],
            1.0,
        );
        assert_color(
            "oklch(0.65125 0.13138 104.097)",
            Space::Oklch,
            [0.65125, 0.13138, 104.097],
            1.0,
        );

        let gray = parse("oklch(0% 0 none)");
        assert_eq!(gray.c2(), None);
    }

    #[test]
    fn color_function() {
        assert_color("color(srgb 25% 50% 75% / 90%)", Space::Srgb, [0.25, 0.5, 0.75], 0.9);
        assert_color("color(display-p3 0 1 0)", Space::DisplayP3, [0.0, 1.0, 0.0], 1.0);
        assert_color("color(a98-rgb 25% 50% 75%)", Space::A98Rgb, [0.25, 0.5, 0.75], 1.0);
        assert_color(
            "color(rec2020 0.42053 0.979780 0.00579)",
            Space::Rec2020,
            [0.42053, 0.97978, 0.00579],
            1.0,
        );
        assert_color("color(xyz 0.2005 0.14089 0.4472)", Space::XyzD65, [0.2005, 0.14089, 0.4472], 1.0);
        assert_color("color(xyz-d50 100% 0 0)", Space::XyzD50, [1.0, 0.0, 0.0], 1.0);
    }

    #[test]
    fn color_function_with_dashed_names() {
        assert_color("color(--jzazbz 0.1 0.2 0.3)", Space::JzAzBz, [0.1, 0.2, 0.3], 1.0);
        assert_color("color(--hsluv 120 50% 40)", Space::Hsluv, [120.0, 50.0, 40.0], 1.0);

        let cmyk = parse("color(--cmyk 0.1 0.2 0.3 0.4 / 0.5)");
        assert_eq!(cmyk.space(), Space::Cmyk);
        assert_eq!(cmyk.component_count(), 4);
        assert_component_eq!(cmyk.c3().unwrap(), 0.4, 1.0e-6);
    }

    fn rgb_color(r: Component, g: Component, b: Component, alpha: Option<Component>) -> Color {
        Color::new(Space::Srgb, r, g, b, alpha)
    }

    #[test]
    fn format_rgb() {
        let black = rgb_color(0.0, 0.0, 0.0, None);
        let half = rgb_color(0.0, 0.0, 0.0, Some(0.5));
        let orange = rgb_color(1.0, 0.5, 0.0, Some(0.5));

        let cases = [
            (&black, CssFormat::default(), "rgb(0 0 0)"),
            (&black, CssFormat { legacy_name: true, ..Default::default() }, "rgba(0 0 0)"),
            (&black, CssFormat { legacy_format: true, ..Default::default() }, "rgb(0, 0, 0)"),
            (
                &black,
                CssFormat { alpha: RenderCondition::Always, ..Default::default() },
                "rgb(0 0 0 / 1)",
            ),
            (&half, CssFormat::default(), "rgb(0 0 0 / 0.5)"),
            (&half, CssFormat { legacy_format: true, ..Default::default() }, "rgb(0, 0, 0, 0.5)"),
            (
                &half,
                CssFormat { alpha: RenderCondition::Never, ..Default::default() },
                "rgb(0 0 0)",
            ),
            (
                &orange,
                CssFormat { units_percent: true, ..Default::default() },
                "rgb(100% 50% 0% / 0.5)",
            ),
            (
                &orange,
                CssFormat { alpha_percent: true, ..Default::default() },
                "rgb(255 128 0 / 50%)",
            ),
        ];

        for (color, format, expected) in cases {
            assert_eq!(color.format_css(&format), expected);
        }
    }

    #[test]
    fn format_hsl() {
        let color = Color::new(Space::Hsl, 180.0, 0.5, 0.5, None);
        let cases = [
            (AngleUnit::Auto, "hsl(180 50% 50%)"),
            (AngleUnit::Degrees, "hsl(180deg 50% 50%)"),
            (AngleUnit::Gradians, "hsl(200grad 50% 50%)"),
            (AngleUnit::Radians, "hsl(3.1416rad 50% 50%)"),
            (AngleUnit::Turns, "hsl(0.5turn 50% 50%)"),
        ];
        for (hue_unit, expected) in cases {
            let format = CssFormat { hue_unit, ..Default::default() };
            assert_eq!(color.format_css(&format), expected);
        }

        let gray = Color::new(Space::Hsl, None, 0.0, 0.0, 0.5);
        let format = CssFormat { legacy_format: true, legacy_name: true, ..Default::default() };
        assert_eq!(gray.format_css(&format), "hsla(none, 0%, 0%, 0.5)");
    }

    #[test]
    fn format_spaces() {
        let cases = [
            (Space::DisplayP3, "color(display-p3 0.1 0.2 0.3)"),
            (Space::A98Rgb, "color(a98-rgb 0.1 0.2 0.3)"),
            (Space::ProPhotoRgb, "color(prophoto-rgb 0.1 0.2 0.3)"),
            (Space::Rec2020, "color(rec2020 0.1 0.2 0.3)"),
            (Space::SrgbLinear, "color(srgb-linear 0.1 0.2 0.3)"),
            (Space::XyzD50, "color(xyz-d50 0.1 0.2 0.3)"),
            (Space::XyzD65, "color(xyz-d65 0.1 0.2 0.3)"),
            (Space::AcesCc, "color(--acescc 0.1 0.2 0.3)"),
            (Space::JzAzBz, "color(--jzazbz 0.1 0.2 0.3)"),
            (Space::Hsl, "hsl(0.1 20% 30%)"),
            (Space::Hwb, "hwb(0.1 20% 30%)"),
            (Space::Lab, "lab(0.1% 0.2 0.3)"),
            (Space::Lch, "lch(0.1% 0.2 0.3)"),
            (Space::Oklab, "oklab(10% 0.2 0.3)"),
            (Space::Oklch, "oklch(10% 0.2 0.3)"),
        ];

        for (space, expected) in cases {
            let color = Color::new(space, 0.1, 0.2, 0.3, None);
            assert_eq!(color.to_css_string(), expected);
            assert_eq!(color.to_string(), expected);
        }

        let small = Color::new(Space::JzAzBz, 0.016279, -2.91842e-4, -0.00161363, None);
        assert_eq!(small.to_css_string(), "color(--jzazbz 0.0163 -0.0003 -0.0016)");
        let rgb = Color::new(Space::Srgb, 1.0 / 255.0, 2.0 / 255.0, 3.0 / 255.0, 1.0);
        assert_eq!(rgb.to_css_string(), "rgb(1 2 3)");
    }

    #[test]
    fn format_dashed_spaces() {
        let hsv = Color::new(Space::Hsv, None, 0.0, 1.0, None);
        assert_eq!(hsv.to_css_string(), "color(--hsv none 0 1)");
        let format = CssFormat { units_percent: true, ..Default::default() };
        assert_eq!(hsv.format_css(&format), "color(--hsv none 0% 100%)");

        let cmyk = Color::cmyk(0.1, 0.2, 0.3, 0.4, 0.5);
        assert_eq!(cmyk.to_css_string(), "color(--cmyk 0.1 0.2 0.3 0.4 / 0.5)");
    }

    #[test]
    fn written_colors_parse_back() {
        let colors = [
            Color::new(Space::Hsl, 1.0, 0.2, 0.3, None),
            Color::new(Space::Lab, 1.0, 20.0, 30.0, 0.25),
            Color::new(Space::Lch, 1.0, 20.0, 30.0, None),
            Color::new(Space::Hwb, 1.0, 0.2, 0.3, None),
            Color::new(Space::Oklab, 0.5, 0.2, 0.3, None),
            Color::new(Space::Oklch, 0.5, 0.2, None, None),
            Color::new(Space::XyzD50, 0.1, 0.2, 0.3, None),
            Color::new(Space::DisplayP3, 0.1, 0.2, 0.3, 0.5),
            Color::new(Space::Hsluv, 120.0, 55.5, 40.25, None),
            Color::cmyk(0.1, 0.2, 0.3, 0.4, None),
        ];

        for color in colors {
            for units_percent in [false, true] {
                let format = CssFormat { units_percent, ..Default::default() };
                let css = color.format_css(&format);
                let parsed = parse(&css);

                assert_eq!(parsed.space(), color.space(), "{css}");
                for (parsed, expected) in parsed.components().zip(color.components()) {
                    match (parsed, expected) {
                        (Some(parsed), Some(expected)) => {
                            assert_component_eq!(parsed, expected, 1.0e-5)
                        }
                        (parsed, expected) => assert_eq!(parsed, expected, "{css}"),
                    }
                }
                let alpha = parsed.alpha().unwrap();
                assert_component_eq!(alpha, color.alpha().unwrap_or(1.0), 1.0e-6);
            }
        }
    }

    #[test]
    fn from_str() {
        assert_eq!("#ff0000".parse::<Color>(), Color::from_css("#ff0000"));
        assert!("nope".parse::<Color>().is_err());
    }
}
