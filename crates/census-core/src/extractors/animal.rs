//! Livestock and animal product extraction.
//!
//! Each element is either a listed animal (or product), whose coded name is
//! decoded and whose answers sit in `animal_details`, or an unlisted one
//! selected by a sentinel code, with a free-text name and answers in
//! `other_animal_details`. The branch is chosen by the sentinel alone.

use census_model::choice::tables;
use census_model::{
    AnimalProductRecord, AnimalRecord, BusinessLineItemRecord, FieldError, LineItemKind,
    RawRecord, Record,
};
use census_transform::Decoder;

use super::ParentRef;
use crate::context::PipelineContext;
use crate::error::ExtractError;

pub const OTHER_ANIMAL: &str = "other_animal";
pub const OTHER_ANIMAL_PRODUCT: &str = "other_animal_product";

/// Counts and sales of one animal holding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldingDetails {
    pub total_animals: Option<i64>,
    pub sales: Option<f64>,
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnimalHolding {
    /// A listed animal with its decoded name.
    Standard {
        name: Option<String>,
        details: HoldingDetails,
    },
    /// An unlisted animal, named in free text.
    Other {
        name: Option<String>,
        details: HoldingDetails,
    },
}

impl AnimalHolding {
    pub fn read(raw: RawRecord<'_>, decoder: &Decoder<'_>) -> Result<Self, FieldError> {
        let code = raw.text("animal_name")?;
        if code.as_deref() == Some(OTHER_ANIMAL) {
            let other = raw.section("other_animal_details")?;
            Ok(Self::Other {
                name: raw.text("animal_name_other")?,
                details: HoldingDetails {
                    total_animals: other.integer("o_total_animals")?,
                    sales: other.number("o_animal_sales")?,
                    revenue: other.number("o_animal_revenue")?,
                },
            })
        } else {
            let standard = raw.section("animal_details")?;
            Ok(Self::Standard {
                name: decoder.choice(tables::ANIMAL, code),
                details: HoldingDetails {
                    total_animals: standard.integer("total_animals")?,
                    sales: standard.number("animal_sales")?,
                    revenue: standard.number("animal_revenue")?,
                },
            })
        }
    }

    /// `(name, name_other, details)`.
    fn into_parts(self) -> (Option<String>, Option<String>, HoldingDetails) {
        match self {
            Self::Standard { name, details } => (name, None, details),
            Self::Other { name, details } => (None, name, details),
        }
    }
}

/// Production figures of one animal product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionDetails {
    pub production_amount: Option<f64>,
    pub sales: Option<f64>,
    pub revenue: Option<f64>,
    pub month_production: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductYield {
    Standard {
        name: Option<String>,
        unit: Option<String>,
        unit_other: Option<String>,
        details: ProductionDetails,
    },
    Other {
        name: Option<String>,
        unit: Option<String>,
        unit_other: Option<String>,
        details: ProductionDetails,
    },
}

impl ProductYield {
    pub fn read(raw: RawRecord<'_>, decoder: &Decoder<'_>) -> Result<Self, FieldError> {
        let code = raw.text("animal_product_name")?;
        let unit = decoder.choice(tables::PRODUCT_UNIT, raw.text("animal_product_unit")?);
        let unit_other = raw.text("animal_product_unit_other")?;
        if code.as_deref() == Some(OTHER_ANIMAL_PRODUCT) {
            let other = raw.section("other_animal_product_details")?;
            Ok(Self::Other {
                name: raw.text("animal_product_name_other")?,
                unit,
                unit_other,
                details: ProductionDetails {
                    production_amount: other.number("o_production_amount")?,
                    sales: other.number("o_animal_product_sales")?,
                    revenue: other.number("o_animal_product_revenue")?,
                    month_production: other.number("o_month_production")?,
                },
            })
        } else {
            let standard = raw.section("animal_product_details")?;
            Ok(Self::Standard {
                name: decoder.choice(tables::ANIMAL_PRODUCT, code),
                unit,
                unit_other,
                details: ProductionDetails {
                    production_amount: standard.number("production_amount")?,
                    sales: standard.number("animal_product_sales")?,
                    revenue: standard.number("animal_product_revenue")?,
                    month_production: standard.number("month_production")?,
                },
            })
        }
    }
}

struct ProductParts {
    name: Option<String>,
    name_other: Option<String>,
    unit: Option<String>,
    unit_other: Option<String>,
    details: ProductionDetails,
}

impl From<ProductYield> for ProductParts {
    fn from(product: ProductYield) -> Self {
        match product {
            ProductYield::Standard {
                name,
                unit,
                unit_other,
                details,
            } => Self {
                name,
                name_other: None,
                unit,
                unit_other,
                details,
            },
            ProductYield::Other {
                name,
                unit,
                unit_other,
                details,
            } => Self {
                name: None,
                name_other: name,
                unit,
                unit_other,
                details,
            },
        }
    }
}

/// Household animal record.
pub fn extract_animal(
    raw: RawRecord<'_>,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    let id = raw.id()?.to_string();
    let (animal_name, animal_name_other, details) =
        AnimalHolding::read(raw, &ctx.decoder())?.into_parts();
    Ok(AnimalRecord {
        id,
        household_id: parent.id.to_string(),
        ward_no: parent.ward_no,
        animal_name,
        animal_name_other,
        total_animals: details.total_animals,
        animal_sales: details.sales,
        animal_revenue: details.revenue,
    }
    .into())
}

/// Household animal product record.
pub fn extract_product(
    raw: RawRecord<'_>,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    let id = raw.id()?.to_string();
    let parts = ProductParts::from(ProductYield::read(raw, &ctx.decoder())?);
    Ok(AnimalProductRecord {
        id,
        household_id: parent.id.to_string(),
        ward_no: parent.ward_no,
        product_name: parts.name,
        product_name_other: parts.name_other,
        unit: parts.unit,
        unit_other: parts.unit_other,
        production_amount: parts.details.production_amount,
        sales: parts.details.sales,
        revenue: parts.details.revenue,
        month_production: parts.details.month_production,
    }
    .into())
}

/// Business animal line item. The head count goes to `quantity`.
pub fn extract_animal_line_item(
    raw: RawRecord<'_>,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    let mut item = BusinessLineItemRecord::new(raw.id()?, parent.id, LineItemKind::Animal);
    let (name, name_other, details) = AnimalHolding::read(raw, &ctx.decoder())?.into_parts();
    item.ward_no = parent.ward_no;
    item.name = name;
    item.name_other = name_other;
    item.quantity = details.total_animals.map(|count| count as f64);
    item.sales = details.sales;
    item.revenue = details.revenue;
    Ok(item.into())
}

/// Business animal product line item.
pub fn extract_product_line_item(
    raw: RawRecord<'_>,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    let mut item = BusinessLineItemRecord::new(raw.id()?, parent.id, LineItemKind::AnimalProduct);
    let parts = ProductParts::from(ProductYield::read(raw, &ctx.decoder())?);
    item.ward_no = parent.ward_no;
    item.name = parts.name;
    item.name_other = parts.name_other;
    item.unit = parts.unit;
    item.unit_other = parts.unit_other;
    item.quantity = parts.details.production_amount;
    item.sales = parts.details.sales;
    item.revenue = parts.details.revenue;
    item.month_production = parts.details.month_production;
    Ok(item.into())
}
