//! # Context Builder
//!
//! Turns the user's most recent crops or sales into a natural-language
//! paragraph that grounds the model's reply in real records.
//!
//! Rendering is a pure function of the fetched rows, so the same database
//! state always yields byte-identical text.

use crate::{
    errors::DataAccessError,
    providers::db::storage::{FarmStore, RECENT_ROWS_LIMIT},
    types::{CropRecord, SaleRecord, Topic, UserId},
};
use tracing::debug;

/// Placeholder shown for any absent value.
pub const NOT_AVAILABLE: &str = "N/D";

pub const NO_CROPS_CONTEXT: &str = "El usuario no tiene cultivos registrados en la base de datos.";
pub const NO_SALES_CONTEXT: &str =
    "No se encontraron ventas recientes para este usuario en la base de datos.";

const CROPS_HEADER: &str = "Cultivos y parámetros técnicos registrados del usuario:";
const SALES_HEADER: &str = "Historial de ventas recientes del usuario:";

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// Fetches the rows relevant to `topic` for `user_id` and renders them.
pub async fn build_context(
    store: &dyn FarmStore,
    user_id: UserId,
    topic: Topic,
) -> Result<String, DataAccessError> {
    debug!(user_id, %topic, store = store.name(), "Building database context");
    let context = match topic {
        Topic::Technical => {
            let crops = store.recent_crops(user_id, RECENT_ROWS_LIMIT).await?;
            render_technical_context(&crops)
        }
        Topic::Commercial => {
            let sales = store.recent_sales(user_id, RECENT_ROWS_LIMIT).await?;
            render_commercial_context(&sales)
        }
    };
    Ok(context)
}

/// Renders one sentence per crop, listing its cultivation practices and the
/// recommendations of its associated product.
pub fn render_technical_context(crops: &[CropRecord]) -> String {
    if crops.is_empty() {
        return NO_CROPS_CONTEXT.to_string();
    }

    let mut lines = vec![CROPS_HEADER.to_string()];
    for crop in crops {
        lines.push(format!(
            "- Cultivo: {} (producto asociado: {}). \
             Frecuencia de riego (días): {}, \
             frecuencia de fertilización (días): {}, \
             días para limpieza de plagas: {}, \
             días para recoger maleza: {}, \
             frecuencia de oxigenación del suelo (días): {}, \
             labores de trazo de surcos/líneas: {}, \
             hoyado o preparación de hoyos: {}. \
             Recomendaciones del producto: profundidad de cultivo recomendada: {}, \
             distancia entre plantas: {}, \
             clima recomendado: {}, \
             temporada recomendada: {}, \
             tipo de suelo recomendado: {}.",
            or_na(&crop.crop_name),
            or_na(&crop.product_name),
            or_na(&crop.watering_days),
            or_na(&crop.fertilize_crop),
            or_na(&crop.pest_cleanup_days),
            or_na(&crop.pick_up_weed),
            or_na(&crop.oxygenate_crop),
            or_na(&crop.make_crop_line),
            or_na(&crop.make_crop_hole),
            or_na(&crop.recommended_cultivation_depth),
            or_na(&crop.recommended_cultivation_distance),
            or_na(&crop.recommended_growing_climate),
            or_na(&crop.recommended_growing_season),
            or_na(&crop.recommended_soil_type),
        ));
    }

    lines.join("\n")
}

/// Renders one sentence per sale plus, when at least one sale has a price,
/// the mean unit price over the priced sales.
pub fn render_commercial_context(sales: &[SaleRecord]) -> String {
    if sales.is_empty() {
        return NO_SALES_CONTEXT.to_string();
    }

    let mut lines = vec![SALES_HEADER.to_string()];
    for sale in sales {
        let price = sale
            .unit_price
            .map(|p| format!("{p:.2} S/"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        lines.push(format!(
            "- Producto vendido: {}, cantidad: {}, precio unitario: {}, detalle: {}.",
            or_na(&sale.name),
            or_na(&sale.quantity),
            price,
            or_na(&sale.description),
        ));
    }

    if let Some(avg) = average_unit_price(sales) {
        lines.push(format!(
            "Precio unitario promedio en estas ventas: {avg:.2} S/."
        ));
    }

    lines.join("\n")
}

/// The arithmetic mean of the non-null unit prices, or `None` if no sale has one.
pub fn average_unit_price(sales: &[SaleRecord]) -> Option<f64> {
    let prices: Vec<f64> = sales.iter().filter_map(|s| s.unit_price).collect();
    if prices.is_empty() {
        return None;
    }
    Some(prices.iter().sum::<f64>() / prices.len() as f64)
}
