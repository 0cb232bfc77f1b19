//! Leptos component kit centered on a generic data table.
//!
//! [`DataTable`] sorts, paginates, expands, and projects application rows into a table or card
//! layout; the remaining components (buttons, alerts, modals, tooltips, skeletons, and friends)
//! share the same `ui-*` class and `data-ui-*` attribute contract so one stylesheet can theme
//! them all. Call [`register_styles`] once at start-up to install the rules the components rely
//! on, and [`provide_ui_kit_settings`] to override kit-wide defaults.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod alerts;
mod icon;
mod primitives;
mod settings;
mod style;
pub mod table;

pub use alerts::{
    use_alerts, Alert, AlertError, AlertKind, AlertProvider, AlertSpec, Alerts, ConfirmDialog,
};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::placement::{TooltipPlacement, VIEWPORT_MARGIN};
pub use primitives::{
    Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Button, ButtonType, ButtonVariant, Card,
    ControlSize, Dimension, EmptyStateCard, IconPosition, Input, InputKind, LayoutPadding, Modal,
    ModalPosition, ModalSize, RowAction, RowActionMenu, RowActionVariant, Search, SelectButton,
    SelectField, SelectOption, Skeleton, SkeletonAnimation, SkeletonIntensity, SkeletonRows,
    SkeletonSize, SkeletonSpec, SkeletonText, SkeletonVariant, Tooltip, TooltipVariant,
};
pub use settings::{provide_ui_kit_settings, use_ui_kit_settings, SettingsError, UiKitSettings};
pub use style::{register_styles, stylesheet, StyleError, STYLE_ELEMENT_ID};
pub use table::{
    Column, ColumnAlign, DataTable, ExpansionSet, PageState, Pagination, PaginationMeta, RowKey,
    SortOrder, SortState, TableRow,
};

/// Convenience imports for applications.
pub mod prelude {
    pub use crate::table::{row_key_fn, CellValue, RowKeyFn};
    pub use crate::{
        provide_ui_kit_settings, register_styles, use_alerts, Alert, AlertKind, AlertProvider,
        AlertSpec, Alerts, Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Button, ButtonType,
        ButtonVariant, Card, Column, ColumnAlign, ConfirmDialog, ControlSize, DataTable,
        EmptyStateCard, ExpansionSet, Icon, IconName, IconPosition, IconSize, Input, InputKind,
        LayoutPadding, Modal, ModalPosition, ModalSize, PaginationMeta, RowAction, RowActionMenu,
        RowKey, Search, SelectButton, SelectField, SelectOption, Skeleton, SkeletonRows,
        SkeletonText, SkeletonVariant, SortOrder, TableRow, Tooltip, TooltipPlacement,
        TooltipVariant, UiKitSettings,
    };
}
