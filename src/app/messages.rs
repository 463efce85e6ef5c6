//! User-facing notification texts.

pub const LOAD_DASHBOARD_FAILED: &str = "加载数据失败";
pub const DASHBOARD_REFRESHED: &str = "数据已刷新";

pub const LOAD_FRIDGE_FAILED: &str = "加载食材失败";
pub const CONSUMED: &str = "已标记为已吃完";
pub const ACTION_FAILED: &str = "操作失败";
pub const DELETE_CONFIRM: &str = "确定要删除这个食材吗？";
pub const DELETED: &str = "已删除";
pub const DELETE_FAILED: &str = "删除失败";

pub const LOAD_RECIPES_FAILED: &str = "加载食谱失败";

pub const LOAD_SHOPPING_FAILED: &str = "加载购物清单失败";
pub const SHOPPING_ADDED: &str = "已添加到购物清单";
pub const ADD_FAILED: &str = "添加失败";

pub const ITEM_ADDED: &str = "食材已添加！";

pub fn ingredients_added(count: usize) -> String {
    format!("已添加 {} 样食材到购物清单", count)
}

pub fn add_item_failed(reason: &str) -> String {
    format!("{}：{}", ADD_FAILED, reason)
}
