// ===== inapp-defines/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use inapp_defines::consts::{DEVICE_TYPE_TRIGGER, TRIGGERS_STORAGE_KEY};
use inapp_defines::{position_table, DisplayPosition, LayoutConstants, TriggerKind};

fn position_color(position: DisplayPosition) -> Color {
    match position {
        DisplayPosition::Top => Color::Cyan,
        DisplayPosition::Centered => Color::Green,
        DisplayPosition::Bottom => Color::Yellow,
    }
}

pub fn print_position_table(layout: &LayoutConstants) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Ord").add_attribute(Attribute::Bold),
        Cell::new("Display Type").add_attribute(Attribute::Bold),
        Cell::new("Position").add_attribute(Attribute::Bold),
        Cell::new("Aspect").add_attribute(Attribute::Bold),
    ]);

    for (display_type, position) in position_table() {
        let aspect = layout
            .aspect_ratio_for(display_type)
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(display_type.ordinal()).set_alignment(CellAlignment::Right),
            Cell::new(display_type),
            Cell::new(position).fg(position_color(position)),
            Cell::new(aspect).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_layout_table(layout: &LayoutConstants) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Constant").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let rows = [
        ("message_margin", layout.message_margin),
        ("banner_aspect_ratio", layout.banner_aspect_ratio),
        ("centered_modal_aspect_ratio", layout.centered_modal_aspect_ratio),
        (
            "max_dismissal_animation_duration",
            layout.max_dismissal_animation_duration,
        ),
    ];
    for (name, value) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    println!("Trigger storage key: {}", TRIGGERS_STORAGE_KEY);
}

pub fn describe_trigger_kind(kind: TriggerKind) -> String {
    match kind {
        TriggerKind::Dynamic(t) => format!("dynamic ({})", t),
        TriggerKind::DeviceType => format!("device type ({})", DEVICE_TYPE_TRIGGER),
        TriggerKind::Static => "static".to_string(),
    }
}
