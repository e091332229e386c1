use osshare_core::{event::Message, Dataset, Os, TimeRange};
use osshare_theme::Theme;
use iced::{
    widget::{column, container, row, scrollable, text, Row},
    Background, Element, Length,
};

/// Year-by-year table of the whole dataset.
///
/// Cells are formatted once at construction; the table ignores the chart's
/// time range and always lists every year.
#[derive(Debug, Clone)]
pub struct DataTable {
    rows: Vec<[String; 4]>,
}

impl DataTable {
    pub fn new(data: &Dataset) -> Self {
        let window = data.window(TimeRange::All);
        let rows = (0..window.len())
            .filter_map(|i| window.row(i))
            .map(|(year, [w, l, m])| {
                [
                    year.to_string(),
                    format!("{w:.2}"),
                    format!("{l:.2}"),
                    format!("{m:.2}"),
                ]
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[[String; 4]] {
        &self.rows
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let size = theme.font_size;
        let header_color = theme.accent.to_iced();

        let header = std::iter::once("Year")
            .chain(Os::ALL.iter().map(|os| os.label()))
            .fold(Row::new(), |r, h| {
                r.push(text(h).size(size).color(header_color).width(Length::FillPortion(1)))
            });

        let stripe = theme.foreground.with_alpha(0.04).to_iced();
        let body = self.rows.iter().enumerate().fold(column![], |col, (i, cells)| {
            let line = cells.iter().fold(Row::new(), |r, cell| {
                r.push(text(cell).size(size).width(Length::FillPortion(1)))
            });
            let striped = i % 2 == 1;
            col.push(
                container(line)
                    .padding([4, 8])
                    .width(Length::Fill)
                    .style(move |_: &iced::Theme| container::Style {
                        background: striped.then_some(Background::Color(stripe)),
                        ..Default::default()
                    }),
            )
        });

        column![
            container(header).padding([6, 8]),
            scrollable(body).height(Length::Fill),
        ]
        .spacing(4)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_year_with_two_decimals() {
        let table = DataTable::new(&Dataset::builtin());
        assert_eq!(table.rows().len(), 24);
        assert_eq!(table.rows()[0], ["2001", "96.00", "0.01", "2.50"].map(String::from));
        assert_eq!(table.rows()[23], ["2024", "72.87", "4.12", "23.01"].map(String::from));
    }
}
