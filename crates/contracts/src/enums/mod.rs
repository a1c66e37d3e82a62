pub mod card_product_kind;
