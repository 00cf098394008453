pub mod item_management;
