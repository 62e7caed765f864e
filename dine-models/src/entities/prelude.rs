pub use super::menu_item::{ActiveModel as MenuItemActiveModel, Entity as MenuItem};
pub use super::order::{ActiveModel as OrderActiveModel, Entity as Order};
pub use super::order_detail::{
    ActiveModel as OrderDetailActiveModel, Column as OrderDetailColumn, Entity as OrderDetail,
    Model as OrderDetailModel,
};
