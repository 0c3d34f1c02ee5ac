//! Leptos form-control and overlay components built on `ui_headless`.
//!
//! Every component emits the stable `data-ui-primitive`/`data-ui-kind` DOM contract and resolves
//! its classes through the [`UiKitProvider`] class map. State ownership, select reduction, and the
//! modal side-effect lifecycle live in `ui_headless`; this crate binds them to signals, DOM
//! events, and the browser document through [`WebModalHost`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod dom;
mod primitives;
pub mod slots;

pub use config::{use_kit_config, KitContext, UiKitProvider};
pub use dom::WebModalHost;
pub use primitives::{
    ArrowDropDownIcon, Button, Checkbox, Chip, Modal, Select, SelectMenu, Switch, TextField,
};
pub use ui_headless::{
    BackdropMode, ButtonVariant, CloseReason, Color, ConfigError, FieldSize, FieldVariant,
    KitConfig, LabelPlacement, OptionValue, SelectChange, SelectOption, SelectValue, Size,
};

/// Glob import for applications composing the kit.
pub mod prelude {
    pub use crate::slots::{BackdropSlotProps, CheckboxIconProps, IconSlotProps, RenderSlot};
    pub use crate::{
        use_kit_config, ArrowDropDownIcon, BackdropMode, Button, ButtonVariant, Checkbox, Chip,
        CloseReason, Color, FieldSize, FieldVariant, KitConfig, LabelPlacement, Modal,
        OptionValue, Select, SelectChange, SelectMenu, SelectOption, SelectValue, Size, Switch,
        TextField, UiKitProvider,
    };
}
