pub mod kma_grid;
