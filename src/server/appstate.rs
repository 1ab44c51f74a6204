use std::sync::Arc;

use crate::catalog::catalog::Catalog;
use crate::configuration::Configuration;
use crate::render::plotrenderer::PlotRenderer;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    renderer: Arc<PlotRenderer>,
    grid_size: usize
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Configuration) -> AppState {
        let (width, height) = config.image_size();
        AppState {
            catalog: Arc::new(catalog),
            renderer: Arc::new(PlotRenderer::new(width, height)),
            grid_size: config.grid_size()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &PlotRenderer {
        &self.renderer
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Catalog::standard(), &Configuration::default())
    }
}
