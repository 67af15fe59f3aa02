//! The egui dashboard shell: selection panel on top, two stacked charts.

use chrono::{Datelike, NaiveDate};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};
use hobart::pipeline::{Comparison, compare};
use hobart_chart::{ChartSpec, LegendCorner, LineTrace, Rgb};
use hobart_data::DATE_FORMAT;
use hobart_returns::ReturnTable;

/// Dashboard state: the two loaded universes, the current selection and the
/// pipeline output cached for that selection.
#[derive(Debug)]
pub(crate) struct DashboardApp {
    baskets: ReturnTable,
    benchmarks: ReturnTable,
    selected_basket: String,
    selected_index: String,
    cached: Option<((String, String), Comparison)>,
}

impl DashboardApp {
    /// Create the app with the first column of each universe pre-selected.
    pub(crate) fn new(baskets: ReturnTable, benchmarks: ReturnTable) -> Self {
        let selected_basket = first_column(&baskets);
        let selected_index = first_column(&benchmarks);
        Self {
            baskets,
            benchmarks,
            selected_basket,
            selected_index,
            cached: None,
        }
    }

    /// Pipeline output for the current selection, recomputed only when the
    /// selected name pair changes.
    fn comparison(&mut self) -> Option<&Comparison> {
        if self.selected_basket.is_empty() || self.selected_index.is_empty() {
            return None;
        }
        let key = (self.selected_basket.clone(), self.selected_index.clone());
        let stale = self.cached.as_ref().is_none_or(|(cached, _)| *cached != key);
        if stale {
            match compare(&self.baskets, &self.benchmarks, &key.0, &key.1) {
                Ok(result) => self.cached = Some((key, result)),
                Err(err) => {
                    tracing::warn!(error = %err, "selection could not be resolved");
                    self.cached = None;
                    return None;
                }
            }
        }
        self.cached.as_ref().map(|(_, result)| result)
    }

    fn selection_panel(&mut self, ctx: &egui::Context) {
        let basket_names = owned_columns(&self.baskets);
        let index_names = owned_columns(&self.benchmarks);

        egui::TopBottomPanel::top("selection").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::ComboBox::from_label("Basket")
                    .selected_text(self.selected_basket.clone())
                    .show_ui(ui, |ui| {
                        for name in &basket_names {
                            ui.selectable_value(&mut self.selected_basket, name.clone(), name);
                        }
                    });
                ui.separator();
                egui::ComboBox::from_label("Index")
                    .selected_text(self.selected_index.clone())
                    .show_ui(ui, |ui| {
                        for name in &index_names {
                            ui.selectable_value(&mut self.selected_index, name.clone(), name);
                        }
                    });
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.selection_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;
            match self.comparison() {
                Some(result) => {
                    show_chart(ui, "comparison", &result.comparison, chart_height);
                    show_chart(ui, "difference", &result.difference, chart_height);
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Select a basket and an index to compare.");
                    });
                }
            }
        });
    }
}

fn first_column(table: &ReturnTable) -> String {
    table
        .column_names()
        .first()
        .map_or_else(String::new, |name| (*name).to_string())
}

fn owned_columns(table: &ReturnTable) -> Vec<String> {
    table
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn show_chart(ui: &mut egui::Ui, id: &str, spec: &ChartSpec, height: f32) {
    ui.vertical(|ui| {
        ui.strong(&spec.title);
        Plot::new(id)
            .height((height - ui.spacing().interact_size.y).max(100.0))
            .legend(Legend::default().position(corner(spec.legend)))
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone())
            .x_axis_formatter(|mark, _range| format_date(mark.value))
            .label_formatter(|name, point| {
                if name.is_empty() {
                    format!("{}: {:.4}", format_date(point.x), point.y)
                } else {
                    format!("{name}\n{}: {:.4}", format_date(point.x), point.y)
                }
            })
            .show(ui, |plot_ui| {
                for trace in &spec.traces {
                    plot_ui.line(line(trace));
                }
            });
    });
}

fn line(trace: &LineTrace) -> Line {
    let points: Vec<[f64; 2]> = trace
        .points
        .iter()
        .map(|(date, value)| [f64::from(date.num_days_from_ce()), *value])
        .collect();
    Line::new(PlotPoints::from(points))
        .color(color32(trace.color))
        .name(&trace.label)
}

/// Plot x values are days from the common era; ticks and hover labels render
/// them back as day-month-year.
fn format_date(x: f64) -> String {
    let days = x.round();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32)
        .map_or_else(String::new, |date| date.format(DATE_FORMAT).to_string())
}

const fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

const fn corner(legend: LegendCorner) -> Corner {
    match legend {
        LegendCorner::TopLeft => Corner::LeftTop,
        LegendCorner::TopRight => Corner::RightTop,
        LegendCorner::BottomLeft => Corner::LeftBottom,
        LegendCorner::BottomRight => Corner::RightBottom,
    }
}
