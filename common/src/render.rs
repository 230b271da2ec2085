//! Presentación de resultados
//!
//! Mapea un AnalysisRecord a cuatro grupos fijos de etiqueta/valor. La Web y
//! la CLI pintan exactamente estos grupos, cada uno a su manera.

use crate::controller::Controller;
use crate::types::AnalysisRecord;

/// Grupo de resultados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Vehicle,
    Plate,
    Environment,
    Additional,
}

impl GroupKind {
    pub fn title(&self) -> &'static str {
        match self {
            GroupKind::Vehicle => "Detalles del Vehículo",
            GroupKind::Plate => "Placa",
            GroupKind::Environment => "Entorno",
            GroupKind::Additional => "Información Adicional",
        }
    }

    /// Clase CSS del grupo
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Vehicle => "vehicle",
            GroupKind::Plate => "plate",
            GroupKind::Environment => "environment",
            GroupKind::Additional => "additional",
        }
    }
}

/// Cómo se muestra el valor de una fila
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Plain,
    /// Con muestra de color al lado
    Swatch,
    /// Número de placa resaltado
    PlateBadge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
    pub style: ValueStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGroup {
    pub kind: GroupKind,
    pub rows: Vec<DisplayRow>,
}

impl DisplayGroup {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

fn row(label: &'static str, value: &str) -> DisplayRow {
    DisplayRow {
        label,
        value: value.to_string(),
        style: ValueStyle::Plain,
    }
}

fn styled(label: &'static str, value: &str, style: ValueStyle) -> DisplayRow {
    DisplayRow {
        style,
        ..row(label, value)
    }
}

/// Siempre cuatro grupos, en orden fijo
pub fn display_groups(record: &AnalysisRecord) -> Vec<DisplayGroup> {
    vec![
        DisplayGroup {
            kind: GroupKind::Vehicle,
            rows: vec![
                row("Marca", &record.car.make),
                row("Modelo", &record.car.model),
                styled("Color", &record.car.color, ValueStyle::Swatch),
            ],
        },
        DisplayGroup {
            kind: GroupKind::Plate,
            rows: vec![
                styled("Número", &record.license_plate.number, ValueStyle::PlateBadge),
                row("País", &record.license_plate.country),
                row("Región", &record.license_plate.region),
            ],
        },
        DisplayGroup {
            kind: GroupKind::Environment,
            rows: vec![
                row("Tipo de Ubicación", &record.environment.location_type),
                row("Clima", &record.environment.weather),
                row("Hora del Día", &record.environment.time_of_day),
            ],
        },
        DisplayGroup {
            kind: GroupKind::Additional,
            rows: vec![
                row("Ocupantes Visibles", &record.additional_info.occupants_visible),
                row("Daños", &record.additional_info.damage),
            ],
        },
    ]
}

/// Qué muestra el panel de resultados
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Busy,
    Groups(Vec<DisplayGroup>),
    Empty,
}

impl ResultView {
    pub fn of(controller: &Controller) -> Self {
        if controller.is_analyzing() {
            ResultView::Busy
        } else if let Some(record) = controller.record() {
            ResultView::Groups(display_groups(record))
        } else {
            ResultView::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::StaticAnalyzer;
    use crate::types::SelectedFile;
    use futures::executor::block_on;

    fn values(group: &DisplayGroup) -> Vec<(&str, &str)> {
        group
            .rows
            .iter()
            .map(|r| (r.label, r.value.as_str()))
            .collect()
    }

    #[test]
    fn test_display_groups_mock_record() {
        let groups = display_groups(&AnalysisRecord::mock());
        assert_eq!(groups.len(), 4);

        assert_eq!(groups[0].title(), "Detalles del Vehículo");
        assert_eq!(
            values(&groups[0]),
            vec![("Marca", "Toyota"), ("Modelo", "Corolla"), ("Color", "Plateado")]
        );

        assert_eq!(groups[1].title(), "Placa");
        assert_eq!(
            values(&groups[1]),
            vec![("Número", "ABC123"), ("País", "México"), ("Región", "Ciudad de México")]
        );

        assert_eq!(groups[2].title(), "Entorno");
        assert_eq!(
            values(&groups[2]),
            vec![("Tipo de Ubicación", "Calle"), ("Clima", "Soleado"), ("Hora del Día", "Día")]
        );

        assert_eq!(groups[3].title(), "Información Adicional");
        assert_eq!(
            values(&groups[3]),
            vec![("Ocupantes Visibles", "Sí"), ("Daños", "No visible")]
        );
    }

    #[test]
    fn test_row_styles() {
        let groups = display_groups(&AnalysisRecord::mock());
        assert_eq!(groups[0].rows[2].style, ValueStyle::Swatch);
        assert_eq!(groups[1].rows[0].style, ValueStyle::PlateBadge);
        assert_eq!(groups[2].rows[0].style, ValueStyle::Plain);
    }

    #[test]
    fn test_result_view_transitions() {
        let mut controller = Controller::default();
        assert_eq!(ResultView::of(&controller), ResultView::Empty);

        controller
            .select_file(SelectedFile::new("photo.png", "image/png", vec![1]))
            .unwrap();
        assert_eq!(ResultView::of(&controller), ResultView::Empty);

        let ticket = controller.begin_analysis().unwrap();
        assert_eq!(ResultView::of(&controller), ResultView::Busy);

        controller.finish_analysis(ticket.generation(), Ok(AnalysisRecord::mock()));
        assert_eq!(
            ResultView::of(&controller),
            ResultView::Groups(display_groups(&AnalysisRecord::mock()))
        );
    }

    #[test]
    fn test_result_view_busy_over_previous_record() {
        let mut controller = Controller::default();
        controller
            .select_file(SelectedFile::new("photo.png", "image/png", vec![1]))
            .unwrap();
        block_on(controller.submit(&StaticAnalyzer::default())).unwrap();

        controller.begin_analysis().unwrap();
        assert_eq!(ResultView::of(&controller), ResultView::Busy);
    }
}
