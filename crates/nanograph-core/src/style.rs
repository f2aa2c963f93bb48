//! Per-node layout properties.
//!
//! A node's [`LayoutMode`] and [`StackOrientation`] describe how it places its
//! own children. [`DockPosition`], the alignments and [`GridPosition`] are
//! hints read by the node's parent.

use smallvec::SmallVec;

/// Strategy a node uses to place its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Absolute placement: children keep their own user rect
    #[default]
    None,
    /// Sequential placement along one axis
    Stack,
    /// Edge-by-edge placement, last child fills the remainder
    Dock,
    /// Row-major placement into equal cells
    Grid,
}

/// Main axis of a stack layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackOrientation {
    /// Left to right
    #[default]
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// Edge of a dock parent a child is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DockPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl DockPosition {
    /// True for edges that consume width.
    pub fn is_horizontal(self) -> bool {
        matches!(self, DockPosition::Left | DockPosition::Right)
    }
}

/// Horizontal placement within the space a parent offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    #[default]
    Fill,
    Left,
    Center,
    Right,
}

/// Vertical placement within the space a parent offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    #[default]
    Fill,
    Top,
    Center,
    Bottom,
}

/// Axis-neutral alignment, so one routine can serve both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
    Stretch,
}

impl From<HorizontalAlignment> for Alignment {
    fn from(value: HorizontalAlignment) -> Self {
        match value {
            HorizontalAlignment::Fill => Alignment::Stretch,
            HorizontalAlignment::Left => Alignment::Start,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::End,
        }
    }
}

impl From<VerticalAlignment> for Alignment {
    fn from(value: VerticalAlignment) -> Self {
        match value {
            VerticalAlignment::Fill => Alignment::Stretch,
            VerticalAlignment::Top => Alignment::Start,
            VerticalAlignment::Center => Alignment::Center,
            VerticalAlignment::Bottom => Alignment::End,
        }
    }
}

/// Unit of a grid row/column size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridUnit {
    /// Layout units
    #[default]
    Pixel,
    /// Percentage of the parent's interior extent
    Percentage,
}

/// Declared size of one grid row or column.
///
/// Stored for consumers; the arrange pass currently splits the interior into
/// equal cells and does not read these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMeasurement {
    pub unit: GridUnit,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub priority: i32,
}

impl GridMeasurement {
    pub fn pixels(value: f32) -> Self {
        Self {
            unit: GridUnit::Pixel,
            value,
            ..Default::default()
        }
    }

    pub fn percent(value: f32) -> Self {
        Self {
            unit: GridUnit::Percentage,
            value,
            ..Default::default()
        }
    }

    /// Set the min/max bounds.
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Grid definition of a `Grid`-mode node.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridProperties {
    pub rows: usize,
    pub columns: usize,
    pub row_sizes: SmallVec<[GridMeasurement; 4]>,
    pub column_sizes: SmallVec<[GridMeasurement; 4]>,
}

impl GridProperties {
    /// A grid with the given track counts and no size specs.
    pub fn uniform(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }

    pub fn with_row_sizes(mut self, sizes: impl IntoIterator<Item = GridMeasurement>) -> Self {
        self.row_sizes = sizes.into_iter().collect();
        self
    }

    pub fn with_column_sizes(mut self, sizes: impl IntoIterator<Item = GridMeasurement>) -> Self {
        self.column_sizes = sizes.into_iter().collect();
        self
    }

    /// Number of cells, or zero for a degenerate grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Explicit cell hint of a grid child. Carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

impl GridPosition {
    /// Create a placement for a single cell.
    pub fn cell(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
        }
    }
}
