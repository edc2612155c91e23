// HTML fragments for the panels around the diagram.
// Pure string builders so they can be tested on the host.

use lens_core::{
    describe_text, format_fixed, AppState, DistanceRange, Field, ImageDescriptor, Labels,
    LensResult, MobileTab, ViewMode,
};

pub fn view_mode_label(mode: ViewMode, labels: &Labels) -> &'static str {
    match mode {
        ViewMode::Simple => labels.view_simple,
        ViewMode::Detail => labels.view_detail,
    }
}

pub fn tab_label(tab: MobileTab, labels: &Labels) -> &'static str {
    match tab {
        MobileTab::Experiment => labels.tab_experiment,
        MobileTab::Image => labels.tab_image,
        MobileTab::Control => labels.tab_control,
    }
}

pub fn field_label(field: Field, labels: &Labels) -> (&'static str, &'static str) {
    match field {
        Field::ObjectDistance => (labels.object_distance, labels.object_distance_hint),
        Field::ScreenDistance => (labels.screen_distance, labels.screen_distance_hint),
        Field::FocalLength => (labels.focal_length, labels.focal_length_hint),
    }
}

/// Mode and focus readout in the page header.
pub fn status_html(state: &AppState, lens: &LensResult, labels: &Labels) -> String {
    let focus = if lens.is_image_on_screen {
        labels.focus_sharp
    } else {
        labels.focus_blurred
    };
    format!(
        "<div class=\"status-item\"><span class=\"status-label\">{}</span><span class=\"status-value\">{}</span></div>\
         <div class=\"status-item\"><span class=\"status-label\">{}</span><span class=\"status-value\">{}</span></div>",
        labels.status_mode,
        view_mode_label(state.view_mode, labels),
        labels.status_focus,
        focus
    )
}

pub fn formula_html(state: &AppState, lens: &LensResult, labels: &Labels) -> String {
    let mut html = format!(
        "<div class=\"formula-card\"><div class=\"formula-title\">{}</div>\
         <div class=\"formula-equation\">1 / f = 1 / a + 1 / b</div>",
        labels.formula_title
    );
    if state.view_mode == ViewMode::Detail {
        let b = match lens.image_distance_cm {
            Some(b) => format!("{} cm", format_fixed(b, 1)),
            None => labels.infinity.to_string(),
        };
        html.push_str(&format!(
            "<div class=\"formula-values\"><div>f = {} cm</div><div>a = {} cm</div><div>b = {}</div></div>",
            format_fixed(state.focal_length_cm, 1),
            format_fixed(state.object_distance_cm, 1),
            b
        ));
    }
    if lens.image_distance_cm.is_none() {
        html.push_str(&format!(
            "<div class=\"formula-note\">{}</div>",
            labels.infinity_note
        ));
    }
    html.push_str("</div>");
    html
}

/// The three comparison cards: original object, screen, observed image.
pub fn wipe_html(
    state: &AppState,
    lens: &LensResult,
    descriptor: Option<&ImageDescriptor>,
    labels: &Labels,
) -> String {
    let (focus_class, focus_text) = if lens.is_image_on_screen {
        ("focus-pill--good", labels.in_focus)
    } else {
        ("focus-pill--bad", labels.out_of_focus)
    };
    let image_class = if lens.is_real_image {
        "image-pill"
    } else {
        "image-pill image-pill--virtual"
    };
    let magnification = match lens.magnification {
        Some(m) => format!("{}: {}\u{d7}", labels.detail_magnification, format_fixed(m, 2)),
        None => format!("{}: --", labels.detail_magnification),
    };

    let mut html = String::from("<div class=\"wipe-grid\">");
    html.push_str(&card(
        labels.card_original,
        "<div class=\"mini-arrow\"></div>",
        &format!(
            "{}: {} cm",
            labels.detail_object_distance,
            format_fixed(state.object_distance_cm, 1)
        ),
    ));
    html.push_str(&card(
        labels.card_screen,
        &format!("<div class=\"focus-pill {focus_class}\">{focus_text}</div>"),
        &format!(
            "{}: {} cm",
            labels.detail_screen_distance,
            format_fixed(state.screen_distance_cm, 1)
        ),
    ));
    html.push_str(&card(
        labels.card_observed,
        &format!(
            "<div class=\"{image_class}\">{}</div>",
            describe_text(descriptor, labels)
        ),
        &magnification,
    ));
    html.push_str("</div>");
    html
}

fn card(title: &str, visual: &str, detail: &str) -> String {
    format!(
        "<div class=\"wipe-card\"><div class=\"wipe-title\">{title}</div>\
         <div class=\"wipe-visual\">{visual}</div><div class=\"wipe-detail\">{detail}</div></div>"
    )
}

pub fn tab_bar_html(active: MobileTab, labels: &Labels) -> String {
    let mut html = String::new();
    for tab in MobileTab::ALL {
        let selected = tab == active;
        html.push_str(&format!(
            "<button type=\"button\" role=\"tab\" data-tab=\"{}\" aria-selected=\"{}\" class=\"{}\">{}</button>",
            tab.as_str(),
            selected,
            if selected { "active" } else { "" },
            tab_label(tab, labels)
        ));
    }
    html
}

pub fn range_input_id(field: Field) -> String {
    format!("{}-range", field.as_str())
}

pub fn number_input_id(field: Field) -> String {
    format!("{}-number", field.as_str())
}

/// Control panel skeleton. Built once; values are synced on each update.
pub fn controls_html(state: &AppState, range: &DistanceRange, labels: &Labels) -> String {
    let mut html = String::from("<div class=\"control-panel\"><div class=\"mode-toggle\">");
    for mode in ViewMode::ALL {
        html.push_str(&format!(
            "<button type=\"button\" data-view-mode=\"{}\" class=\"{}\">{}</button>",
            mode.as_str(),
            if mode == state.view_mode { "active" } else { "" },
            view_mode_label(mode, labels)
        ));
    }
    html.push_str("</div>");

    for field in Field::ALL {
        let (label, hint) = field_label(field, labels);
        let value = state.distance(field);
        let bounds = format!(
            "min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\"",
            range.min, range.max, range.step, value
        );
        html.push_str(&format!(
            "<div class=\"range-field\"><div class=\"range-header\"><div>\
             <div class=\"range-label\">{label}</div><div class=\"range-hint\">{hint}</div></div>\
             <div class=\"range-input\"><input type=\"number\" id=\"{}\" data-field=\"{}\" {bounds} aria-label=\"{label}\"/><span>cm</span></div></div>\
             <input type=\"range\" id=\"{}\" data-field=\"{}\" {bounds}/></div>",
            number_input_id(field),
            field.as_str(),
            range_input_id(field),
            field.as_str(),
        ));
    }

    html.push_str(&format!(
        "<label class=\"rays-toggle\"><input type=\"checkbox\" id=\"show-rays\"{}/> {}</label>",
        if state.show_rays { " checked" } else { "" },
        labels.show_rays
    ));
    html.push_str(&format!(
        "<div class=\"reset-row\"><button type=\"button\" class=\"reset\" id=\"reset\">{}</button></div></div>",
        labels.reset
    ));
    html
}

/// Parse a `data-field` attribute back into its [`Field`].
pub fn field_from_id(id: &str) -> Option<Field> {
    Field::ALL.into_iter().find(|f| f.as_str() == id)
}

pub fn view_mode_from_id(id: &str) -> Option<ViewMode> {
    ViewMode::ALL.into_iter().find(|m| m.as_str() == id)
}

pub fn tab_from_id(id: &str) -> Option<MobileTab> {
    MobileTab::ALL.into_iter().find(|t| t.as_str() == id)
}
