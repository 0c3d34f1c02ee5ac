//! DOM-free core of the UI kit.
//!
//! This crate owns everything about the form and overlay controls that does not touch the DOM:
//! controlled/uncontrolled value ownership, the select value and menu reducer, the modal
//! side-effect lifecycle written against the [`ModalHost`] capability trait, semantic class
//! resolution, and library configuration. The Leptos component layer in `ui_kit` renders on top
//! of these types; tests exercise them natively through [`MemoryModalHost`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod classes;
pub mod config;
pub mod controllable;
pub mod field_state;
pub mod focus_trap;
pub mod ids;
pub mod modal;
pub mod open_state;
pub mod scroll_lock;
pub mod select;
pub mod tokens;
pub mod value;

pub use classes::{ClassList, ClassMap};
pub use config::{ConfigError, KitConfig, ModalDefaults, SelectDefaults};
pub use controllable::Controllable;
pub use field_state::{checkbox_glyph, CheckboxGlyph, NativeToggle, TextState, ToggleState};
pub use focus_trap::FocusTrapStack;
pub use ids::{next_dom_id, resolve_dom_id};
pub use modal::{
    host::{AutoFocusTarget, MemoryModalHost, ModalHost},
    BackdropMode, CloseHandler, CloseReason, ModalCloser, ModalLifecycle, ModalNotice,
    ModalOptions,
};
pub use open_state::{OpenState, OpenTransition};
pub use scroll_lock::{ScrollLock, ScrollLockChange};
pub use select::{
    reduce_select, ChipModel, NoneOption, SelectAction, SelectEffect, SelectInit, SelectProps,
    SelectState,
};
pub use tokens::{ButtonVariant, Color, FieldSize, FieldVariant, LabelPlacement, Size};
pub use value::{
    ChangeTarget, FloatValue, OptionValue, SelectChange, SelectOption, SelectValue,
};
