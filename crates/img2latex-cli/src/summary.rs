use console::Style;
use img2latex_core::config::ServiceConfig;
use img2latex_core::state::ConverterState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

/// Print what is about to be uploaded, to stderr so stdout stays pure LaTeX.
pub fn print_conversion_summary(config: &ServiceConfig, state: &ConverterState) {
    let s = Styles::new();

    eprintln!();
    eprintln!("  {}", s.title.apply_to("Image to LaTeX"));
    eprintln!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    eprintln!();

    if let Some(image) = state.selected() {
        eprintln!("  {:<10}{}", s.label.apply_to("Image"), s.path.apply_to(image.name()));
        eprintln!(
            "  {:<10}{}",
            s.label.apply_to("Type"),
            s.value.apply_to(format!("{} ({} bytes)", image.mime(), image.len()))
        );
    }
    eprintln!("  {:<10}{}", s.label.apply_to("Endpoint"), s.path.apply_to(&config.endpoint));
    eprintln!("  {:<10}{}", s.label.apply_to("Field"), s.value.apply_to(&config.field_name));
    eprintln!();
}
