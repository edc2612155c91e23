//! Label tables for the supported UI languages.
//!
//! Every frontend renders from one of these tables instead of carrying its own
//! copy of the strings.

use crate::optics::{ImageDescriptor, ImageKind, ImageSize, Orientation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Resolve a BCP 47 style tag such as `"en-US"`. Unknown tags fall back to Japanese.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        match primary.as_str() {
            "en" => Locale::En,
            _ => Locale::Ja,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }
}

#[derive(Debug)]
pub struct Labels {
    // Header
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub status_mode: &'static str,
    pub status_focus: &'static str,
    pub focus_sharp: &'static str,
    pub focus_blurred: &'static str,

    // Panels
    pub experiment_heading: &'static str,
    pub experiment_meta: &'static str,
    pub control_heading: &'static str,
    pub control_meta: &'static str,
    pub image_heading: &'static str,
    pub image_meta: &'static str,
    pub diagram_aria: &'static str,

    // Controls
    pub view_simple: &'static str,
    pub view_detail: &'static str,
    pub object_distance: &'static str,
    pub object_distance_hint: &'static str,
    pub screen_distance: &'static str,
    pub screen_distance_hint: &'static str,
    pub focal_length: &'static str,
    pub focal_length_hint: &'static str,
    pub show_rays: &'static str,
    pub reset: &'static str,

    // Formula card
    pub formula_title: &'static str,
    pub infinity: &'static str,
    pub infinity_note: &'static str,

    // Comparison cards
    pub card_original: &'static str,
    pub card_screen: &'static str,
    pub card_observed: &'static str,
    pub in_focus: &'static str,
    pub out_of_focus: &'static str,
    pub detail_object_distance: &'static str,
    pub detail_screen_distance: &'static str,
    pub detail_magnification: &'static str,
    pub image_at_infinity: &'static str,

    // Descriptor words
    pub real: &'static str,
    pub virtual_: &'static str,
    pub upright: &'static str,
    pub inverted: &'static str,
    pub enlarged: &'static str,
    pub reduced: &'static str,
    pub same_size: &'static str,
    pub list_separator: &'static str,

    // Diagram
    pub diagram_screen: &'static str,
    pub diagram_lens: &'static str,
    pub diagram_object: &'static str,
    pub diagram_image: &'static str,
    pub diagram_focal: &'static str,

    // Tabs
    pub tab_experiment: &'static str,
    pub tab_image: &'static str,
    pub tab_control: &'static str,
}

pub static JA: Labels = Labels {
    eyebrow: "凸レンズ実験",
    title: "凸レンズラボ",
    subtitle: "物体距離・スクリーン距離・焦点距離を動かして像の変化を観察しよう。",
    status_mode: "モード",
    status_focus: "ピント",
    focus_sharp: "合焦",
    focus_blurred: "ぼけ",

    experiment_heading: "実験図",
    experiment_meta: "SVG・レンズ中心・cmスケール",
    control_heading: "操作",
    control_meta: "距離と表示を調整",
    image_heading: "像の観察",
    image_meta: "元の物体・スクリーン・観察像",
    diagram_aria: "凸レンズの実験図",

    view_simple: "シンプル",
    view_detail: "詳細",
    object_distance: "物体距離 (a)",
    object_distance_hint: "物体からレンズ",
    screen_distance: "スクリーン距離",
    screen_distance_hint: "スクリーンからレンズ",
    focal_length: "焦点距離 (f)",
    focal_length_hint: "凸レンズ",
    show_rays: "光線を表示",
    reset: "リセット",

    formula_title: "レンズの公式",
    infinity: "無限遠",
    infinity_note: "像は無限遠（物体が焦点上）。",

    card_original: "元の物体",
    card_screen: "スクリーン",
    card_observed: "観察像",
    in_focus: "ピントが合っている",
    out_of_focus: "ピントが合っていない",
    detail_object_distance: "物体距離",
    detail_screen_distance: "スクリーン距離",
    detail_magnification: "倍率",
    image_at_infinity: "像は無限遠",

    real: "実像",
    virtual_: "虚像",
    upright: "正立",
    inverted: "倒立",
    enlarged: "拡大",
    reduced: "縮小",
    same_size: "等倍",
    list_separator: "・",

    diagram_screen: "スクリーン",
    diagram_lens: "レンズ",
    diagram_object: "物体",
    diagram_image: "像",
    diagram_focal: "F",

    tab_experiment: "実験",
    tab_image: "像",
    tab_control: "操作",
};

pub static EN: Labels = Labels {
    eyebrow: "Convex lens experiment",
    title: "Convex Lens Lab",
    subtitle: "Move the object, the screen, and the focal length to see how the image changes.",
    status_mode: "Mode",
    status_focus: "Focus",
    focus_sharp: "Sharp",
    focus_blurred: "Blurred",

    experiment_heading: "Experiment",
    experiment_meta: "SVG, lens-centred, cm scale",
    control_heading: "Controls",
    control_meta: "Adjust distances and display",
    image_heading: "Image",
    image_meta: "Original, screen, observed",
    diagram_aria: "Convex lens experiment diagram",

    view_simple: "Simple",
    view_detail: "Detail",
    object_distance: "Object distance (a)",
    object_distance_hint: "Object to lens",
    screen_distance: "Screen distance",
    screen_distance_hint: "Screen to lens",
    focal_length: "Focal length (f)",
    focal_length_hint: "Convex lens",
    show_rays: "Show rays",
    reset: "Reset",

    formula_title: "Lens formula",
    infinity: "infinity",
    infinity_note: "Image at infinity (object at the focal point).",

    card_original: "Original",
    card_screen: "Screen",
    card_observed: "Observed",
    in_focus: "In focus",
    out_of_focus: "Out of focus",
    detail_object_distance: "Object distance",
    detail_screen_distance: "Screen distance",
    detail_magnification: "Magnification",
    image_at_infinity: "Image at infinity",

    real: "real",
    virtual_: "virtual",
    upright: "upright",
    inverted: "inverted",
    enlarged: "enlarged",
    reduced: "reduced",
    same_size: "same size",
    list_separator: ", ",

    diagram_screen: "Screen",
    diagram_lens: "Lens",
    diagram_object: "Object",
    diagram_image: "Image",
    diagram_focal: "F",

    tab_experiment: "Experiment",
    tab_image: "Image",
    tab_control: "Controls",
};

/// One-line summary of an image, e.g. "real, inverted, reduced".
pub fn describe_text(descriptor: Option<&ImageDescriptor>, labels: &Labels) -> String {
    let Some(d) = descriptor else {
        return labels.image_at_infinity.to_string();
    };
    let kind = match d.kind {
        ImageKind::Real => labels.real,
        ImageKind::Virtual => labels.virtual_,
    };
    let orientation = match d.orientation {
        Orientation::Upright => labels.upright,
        Orientation::Inverted => labels.inverted,
    };
    let size = match d.size {
        ImageSize::Enlarged => labels.enlarged,
        ImageSize::Reduced => labels.reduced,
        ImageSize::Same => labels.same_size,
    };
    [kind, orientation, size].join(labels.list_separator)
}

// Fractional digits needed to print any f64 exactly (the smallest subnormal has 1074)
const EXACT_FRACTION_DIGITS: usize = 1080;

/// Fixed-point formatting with the rounding of JavaScript's `toFixed`.
///
/// Ties on the exact decimal expansion round away from zero, so `6.25` at one
/// digit prints `6.3`. A value that rounds to zero never prints a minus sign.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut buf: Vec<u8> = int_part.bytes().collect();
    buf.extend((0..digits).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(digits).is_some_and(|&d| d >= b'5') {
        let mut i = buf.len();
        loop {
            if i == 0 {
                buf.insert(0, b'1');
                break;
            }
            i -= 1;
            if buf[i] == b'9' {
                buf[i] = b'0';
            } else {
                buf[i] += 1;
                break;
            }
        }
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 2);
    if value.is_sign_negative() && buf.iter().any(|&d| d != b'0') {
        out.push('-');
    }
    out.extend(buf[..split].iter().map(|&d| char::from(d)));
    if digits > 0 {
        out.push('.');
        out.extend(buf[split..].iter().map(|&d| char::from(d)));
    }
    out
}
