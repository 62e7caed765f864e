pub mod menu_item;
pub mod order;
pub mod order_detail;

const INIT_ORDER_ORDER: i32 = 1;
const INIT_MENU_ITEM_ORDER: i32 = INIT_ORDER_ORDER + 1;
const INIT_ORDER_DETAIL_ORDER: i32 = INIT_MENU_ITEM_ORDER + 1;
