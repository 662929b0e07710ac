pub mod coin;
pub mod derived;
pub mod event;
pub mod favorites;
pub mod settings;
pub mod view;
