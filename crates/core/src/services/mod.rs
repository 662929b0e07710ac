pub mod derived_view;
