//! Chart Mode Module
//! The five chart types, their required columns, and the critique text
//! shown under each bad panel.

/// Chart type selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    Bar,
    Pie,
    Line,
    Map,
    Donut,
}

impl Default for ChartMode {
    fn default() -> Self {
        ChartMode::Bar
    }
}

impl ChartMode {
    /// All modes in selector order.
    pub const ALL: [ChartMode; 5] = [
        ChartMode::Bar,
        ChartMode::Pie,
        ChartMode::Line,
        ChartMode::Map,
        ChartMode::Donut,
    ];

    /// Label shown in the chart type selector.
    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Bar => "Bar Chart",
            ChartMode::Pie => "Pie Chart",
            ChartMode::Line => "Line Chart",
            ChartMode::Map => "Map Chart",
            ChartMode::Donut => "Donut Chart",
        }
    }

    /// Numbered section heading above the paired panels.
    pub fn heading(self) -> &'static str {
        match self {
            ChartMode::Bar => "1. Bar Chart",
            ChartMode::Pie => "2. Pie Chart",
            ChartMode::Line => "3. Line Chart",
            ChartMode::Map => "4. Map Chart",
            ChartMode::Donut => "5. Donut Chart",
        }
    }

    /// Title of the bad panel (the donut one is the joke it looks like).
    pub fn bad_title(self) -> &'static str {
        match self {
            ChartMode::Bar => "❌ Bad Bar Chart",
            ChartMode::Pie => "❌ Bad Pie Chart",
            ChartMode::Line => "❌ Bad Line Chart",
            ChartMode::Map => "❌ Bad Map Chart",
            ChartMode::Donut => "❌ Bad Donut Chart (Actually Pie)",
        }
    }

    /// Title of the good panel.
    pub fn good_title(self) -> &'static str {
        match self {
            ChartMode::Bar => "✅ Fixed Bar Chart",
            ChartMode::Pie => "✅ Fixed Pie Chart",
            ChartMode::Line => "✅ Fixed Line Chart",
            ChartMode::Map => "✅ Fixed Map Chart",
            ChartMode::Donut => "✅ Fixed Donut Chart",
        }
    }

    /// Columns the good panel needs before it will render.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            ChartMode::Bar | ChartMode::Pie | ChartMode::Donut => &["Category", "Value"],
            ChartMode::Line => &["Year", "Category", "Value"],
            ChartMode::Map => &["Latitude", "Longitude"],
        }
    }

    /// Warning shown in the good panel when required columns are absent.
    pub fn columns_warning(self) -> &'static str {
        match self {
            ChartMode::Bar | ChartMode::Pie | ChartMode::Donut => {
                "Columns 'Category' and 'Value' required."
            }
            ChartMode::Line => "Columns 'Year', 'Category', and 'Value' required.",
            ChartMode::Map => "Columns 'Latitude' and 'Longitude' required.",
        }
    }

    /// The five hard-coded mistakes listed under the bad panel.
    pub fn critiques(self) -> [(&'static str, &'static str); 5] {
        match self {
            ChartMode::Bar => [
                ("No x-axis labels", "Viewers can't tell what each bar represents."),
                ("Missing title", "Chart purpose is unclear."),
                ("No color distinction", "Can't distinguish between groups/categories."),
                ("Only numeric data shown", "Not meaningful without category labels."),
                ("Overly simplistic", "Lack of customization makes it hard to understand."),
            ],
            ChartMode::Pie => [
                ("No category labels", "Can't tell what each slice represents."),
                ("No values shown", "No idea of proportion."),
                ("Colors too similar", "Hard to differentiate slices."),
                ("No title", "Viewer doesn't know what this pie shows."),
                ("Only values shown", "Without labels, it's meaningless."),
            ],
            ChartMode::Line => [
                ("Missing x-axis (e.g. time)", "No trend or time pattern shown."),
                ("No category separation", "Lines are not grouped or distinguished."),
                ("No markers or line styles", "Hard to read intersections."),
                ("No axis labels", "Can't interpret values or time scale."),
                ("No title", "Purpose of chart is unclear."),
            ],
            ChartMode::Map => [
                ("No data labels", "Hard to understand what the locations represent."),
                ("No tooltip/info", "User cannot get insight from points."),
                ("Overlapping points", "Many markers may overlap and be unreadable."),
                ("No zoom/pan control", "Difficult to explore."),
                ("No color coding", "Everything looks the same."),
            ],
            ChartMode::Donut => [
                ("Not a real donut", "No hole means it's just a pie chart."),
                ("No labels", "Hard to tell what segments represent."),
                ("No values or percentages", "No sense of scale."),
                ("No title", "Viewer doesn't know context."),
                ("Too many segments", "Hard to compare thin slices."),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_modes_with_distinct_labels() {
        let labels: Vec<&str> = ChartMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels.len(), 5);
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn required_columns_per_mode() {
        assert_eq!(ChartMode::Bar.required_columns(), &["Category", "Value"]);
        assert_eq!(ChartMode::Donut.required_columns(), &["Category", "Value"]);
        assert_eq!(
            ChartMode::Line.required_columns(),
            &["Year", "Category", "Value"]
        );
        assert_eq!(ChartMode::Map.required_columns(), &["Latitude", "Longitude"]);
    }

    #[test]
    fn every_mode_has_five_critiques() {
        for mode in ChartMode::ALL {
            let critiques = mode.critiques();
            assert_eq!(critiques.len(), 5);
            for (title, reason) in critiques {
                assert!(!title.is_empty());
                assert!(!reason.is_empty());
            }
        }
    }
}
