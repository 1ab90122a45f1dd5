//! Crop extraction, shared by the seven crop groups of both forms.

use census_model::{
    BusinessLineItemRecord, CropCategory, CropRecord, FieldError, LineItemKind, RawRecord, Record,
};
use census_transform::{Decoder, area_field};

use super::ParentRef;
use crate::context::PipelineContext;
use crate::error::ExtractError;

/// Answers of one crop element, keyed by its category prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct CropYield {
    pub id: String,
    pub category: CropCategory,
    pub name: Option<String>,
    pub area: Option<f64>,
    pub production: Option<f64>,
    pub sales: Option<f64>,
    pub revenue: Option<f64>,
    pub plant_count: Option<i64>,
}

impl CropYield {
    pub fn read(
        raw: RawRecord<'_>,
        category: CropCategory,
        decoder: &Decoder<'_>,
    ) -> Result<Self, FieldError> {
        let plant_count = match category.plant_count_key() {
            Some(key) => raw.integer(key)?,
            None => None,
        };
        Ok(Self {
            id: raw.id()?.to_string(),
            category,
            name: decoder.choice(category.choice_table(), raw.text(category.prefix())?),
            area: area_field(&raw, &category.key("area"))?,
            production: raw.number(&category.key("production"))?,
            sales: raw.number(&category.key("sales"))?,
            revenue: raw.number(&category.key("revenue"))?,
            plant_count,
        })
    }

    pub fn into_crop(self, parent: ParentRef<'_>) -> CropRecord {
        CropRecord {
            id: self.id,
            household_id: parent.id.to_string(),
            ward_no: parent.ward_no,
            category: self.category.slug().to_string(),
            crop_name: self.name,
            area: self.area,
            production: self.production,
            sales: self.sales,
            revenue: self.revenue,
            plant_count: self.plant_count,
        }
    }

    pub fn into_line_item(self, parent: ParentRef<'_>) -> BusinessLineItemRecord {
        let mut item = BusinessLineItemRecord::new(self.id, parent.id, LineItemKind::Crop);
        item.ward_no = parent.ward_no;
        item.category = Some(self.category.slug().to_string());
        item.name = self.name;
        item.area = self.area;
        item.plant_count = self.plant_count;
        item.quantity = self.production;
        item.sales = self.sales;
        item.revenue = self.revenue;
        item
    }
}

/// Household crop record.
pub fn extract(
    raw: RawRecord<'_>,
    category: CropCategory,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    Ok(CropYield::read(raw, category, &ctx.decoder())?
        .into_crop(parent)
        .into())
}

/// Business crop line item.
pub fn extract_line_item(
    raw: RawRecord<'_>,
    category: CropCategory,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    Ok(CropYield::read(raw, category, &ctx.decoder())?
        .into_line_item(parent)
        .into())
}
