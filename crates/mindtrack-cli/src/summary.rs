use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mindtrack_history::{AssessmentPoint, CheckInPoint};
use mindtrack_model::{MAX_LEVEL, QuestionBank, QuestionKind, ResultData};
use mindtrack_scoring::SummaryBand;

const BAR_WIDTH: usize = 10;

pub fn print_result(result: &ResultData) {
    let band = SummaryBand::for_score(result.wellness_score);
    println!("Assessment results ({band})");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Measure"),
        header_cell("Score"),
        header_cell(""),
    ]);
    apply_result_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in result.levels() {
        let higher_is_better = label == "Wellness Score";
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(format!("{value}/{MAX_LEVEL}")),
            bar_cell(value, higher_is_better),
        ]);
    }
    println!("{table}");

    println!();
    println!("{}", result.summary);
    println!();
    println!("Suggestions:");
    for suggestion in &result.suggestions {
        println!("- {suggestion}");
    }
}

pub fn print_questions(bank: &QuestionBank) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Id"),
        header_cell("Category"),
        header_cell("Answer"),
        header_cell("Required"),
        header_cell("Question"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for (index, question) in bank.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(question.id).fg(Color::Cyan),
            Cell::new(question.category),
            Cell::new(answer_hint(&question.kind)),
            if question.required {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            },
            Cell::new(question.text),
        ]);
    }
    println!("{table}");
}

pub fn print_assessment_trend(points: &[AssessmentPoint]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Wellness"),
        header_cell("Stress"),
        header_cell("Anxiety"),
        header_cell("Depression"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for point in points {
        table.add_row(vec![
            Cell::new(&point.name),
            level_cell(point.wellness, true),
            level_cell(point.stress, false),
            level_cell(point.anxiety, false),
            level_cell(point.depression, false),
        ]);
    }
    println!("Assessment history:");
    println!("{table}");
}

pub fn print_check_in_trend(points: &[CheckInPoint]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Mood"),
        header_cell("Sleep"),
        header_cell("Energy"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for point in points {
        table.add_row(vec![
            Cell::new(&point.name),
            level_cell(point.mood, true),
            level_cell(point.sleep, true),
            level_cell(point.energy, true),
        ]);
    }
    println!("Check-in history:");
    println!("{table}");
}

fn answer_hint(kind: &QuestionKind) -> String {
    match kind {
        QuestionKind::Slider { min, max, .. } => format!("{min}-{max}"),
        QuestionKind::Radio { options } => options.join(" | "),
        QuestionKind::Textarea => "free text".to_string(),
    }
}

/// Green for good, red for concerning, yellow in between.
fn level_color(value: u8, higher_is_better: bool) -> Color {
    let goodness = if higher_is_better {
        value
    } else {
        MAX_LEVEL + 1 - value
    };
    match goodness {
        8.. => Color::Green,
        4..=7 => Color::Yellow,
        _ => Color::Red,
    }
}

fn level_cell(value: u8, higher_is_better: bool) -> Cell {
    Cell::new(value).fg(level_color(value, higher_is_better))
}

fn bar_cell(value: u8, higher_is_better: bool) -> Cell {
    let filled = usize::from(value).min(BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    Cell::new(bar).fg(level_color(value, higher_is_better))
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_result_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
