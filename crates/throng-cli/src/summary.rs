use console::Style;
use throng_core::pipeline::{RunSummary, TierKind};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    tier: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            tier: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(summary: &RunSummary) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Throng Energy Analysis"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<16}{}",
        s.label.apply_to("Tracks"),
        s.value.apply_to(summary.tracks)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Segments"),
        s.value.apply_to(summary.segments)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Energy samples"),
        s.value.apply_to(summary.samples)
    );

    let tier = match summary.tier {
        TierKind::Empty => "placeholder (no data)",
        TierKind::Sparse => "bars (limited data)",
        TierKind::Full => "histogram",
    };
    println!("  {:<16}{}", s.label.apply_to("Tier"), s.tier.apply_to(tier));

    if summary.trim_passes > 0 {
        println!(
            "  {:<16}{} pass(es), {} sample(s) retained",
            s.label.apply_to("Trimming"),
            s.value.apply_to(summary.trim_passes),
            s.value.apply_to(summary.retained_samples)
        );
    }

    println!();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Artifact"),
        s.path.apply_to(summary.artifact.display())
    );
    println!();
}
