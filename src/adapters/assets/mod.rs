pub mod scaffold_assets;
