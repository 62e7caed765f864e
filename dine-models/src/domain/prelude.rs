pub use crate::domain::{
    common::{PageParams, PageResult, PathId},
    order_detail::{NewOrderDetail, OrderDetailPageParams, UpdateOrderDetail},
};
