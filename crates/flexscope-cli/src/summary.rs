use console::Style;
use flexscope_core::gallery::Gallery;
use flexscope_core::script::ReplayFrame;
use flexscope_core::viewport::ViewportTransform;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    tag: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            tag: Style::new().green(),
            dim: Style::new().dim().yellow(),
        }
    }
}

pub fn print_gallery(gallery: &Gallery) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Gallery"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(7)));
    println!();

    if gallery.is_empty() {
        println!("  {}", s.dim.apply_to("(no images)"));
        println!();
        return;
    }

    for item in gallery.iter() {
        let marker = if item.selected { "*" } else { " " };
        print!(
            "  {marker} {:>3}  {:<30}{}",
            s.label.apply_to(item.id),
            s.value.apply_to(&item.name),
            s.label.apply_to(&item.timestamp)
        );
        if let Some(ref tag) = item.tag {
            print!("  {}", s.tag.apply_to(tag));
        }
        println!();
    }
    println!();
}

pub fn print_replay(frames: &[ReplayFrame], css: bool) {
    let s = Styles::new();

    for frame in frames {
        let state = match frame.transform {
            Some(ref t) => format_transform(t, css),
            None => s.dim.apply_to(format!("({}, no image)", frame.section)).to_string(),
        };
        let drag = if frame.dragging { " [drag]" } else { "" };
        println!(
            "  {:>4}  {:<18}{}{}",
            s.label.apply_to(frame.line),
            frame.step,
            s.value.apply_to(state),
            s.tag.apply_to(drag)
        );
    }
}

fn format_transform(t: &ViewportTransform, css: bool) -> String {
    if css {
        t.to_css()
    } else {
        format!(
            "pan=({}, {}) zoom={} ({}%)",
            t.pan_x,
            t.pan_y,
            t.zoom,
            t.zoom_percent()
        )
    }
}
