pub mod catalog_entities;
