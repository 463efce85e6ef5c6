//! In-memory stand-in for the FreshTrack API, used by controller and web tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::{InventoryApi, RequestError, RequestResult};
use crate::model::{
    ApiInfo, FoodItem, ItemId, NewFoodItem, NewShoppingItem, Recipe, ShoppingItem, Stats,
    UrgencyLevel, User, UserId,
};

/// A request as the fake saw it
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Health,
    User(UserId),
    Stats(UserId),
    Expiring(UserId, u32),
    ListItems(UserId, bool),
    Consume(ItemId),
    Delete(ItemId),
    CreateItem(UserId, NewFoodItem),
    Recipes(UserId, u32),
    Shopping(UserId, bool),
    CreateShopping(UserId, NewShoppingItem),
    Purchase(ItemId),
}

impl Call {
    fn op(&self) -> &'static str {
        match self {
            Call::Health => "health",
            Call::User(_) => "user",
            Call::Stats(_) => "stats",
            Call::Expiring(..) => "expiring",
            Call::ListItems(..) => "list_items",
            Call::Consume(_) => "consume",
            Call::Delete(_) => "delete",
            Call::CreateItem(..) => "create_item",
            Call::Recipes(..) => "recipes",
            Call::Shopping(..) => "shopping",
            Call::CreateShopping(..) => "create_shopping",
            Call::Purchase(_) => "purchase",
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub stats: Mutex<Stats>,
    pub expiring: Mutex<Vec<FoodItem>>,
    pub items: Mutex<Vec<FoodItem>>,
    pub recipes: Mutex<Vec<Recipe>>,
    pub shopping: Mutex<Vec<ShoppingItem>>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<&'static str>>,
    /// Operations that never answer
    hanging: Mutex<HashSet<&'static str>>,
    /// Ingredient names whose shopping creation fails
    failing_ingredients: Mutex<HashSet<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call of the named operation fail with a 500
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
    }

    /// Make every call of the named operation wait forever once recorded
    pub fn hang(&self, op: &'static str) {
        self.hanging.lock().unwrap().insert(op);
    }

    pub fn fail_ingredient(&self, name: &str) {
        self.failing_ingredients
            .lock()
            .unwrap()
            .insert(name.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.op() == op)
            .count()
    }

    async fn enter(&self, call: Call) -> RequestResult<()> {
        let hangs = self.hanging.lock().unwrap().contains(call.op());
        let result = self.record(call);
        if hangs {
            std::future::pending::<()>().await;
        }
        result
    }

    fn record(&self, call: Call) -> RequestResult<()> {
        let op = call.op();
        let ingredient_fails = match &call {
            Call::CreateShopping(_, item) => self
                .failing_ingredients
                .lock()
                .unwrap()
                .contains(&item.item_name),
            _ => false,
        };
        self.calls.lock().unwrap().push(call);

        if ingredient_fails || self.failing.lock().unwrap().contains(op) {
            Err(RequestError::Api {
                status: 500,
                message: format!("{} failed", op),
            })
        } else {
            Ok(())
        }
    }
}

pub fn food_item(id: ItemId, name: &str, level: UrgencyLevel, days_left: i64) -> FoodItem {
    FoodItem {
        id,
        food_name: name.to_string(),
        category: "蔬菜".to_string(),
        quantity: 1,
        quantity_unit: "个".to_string(),
        expiration_date: "2024-05-01T00:00:00".to_string(),
        purchase_date: None,
        days_left: Some(days_left),
        urgency_level: level,
        is_consumed: 0,
    }
}

pub fn shopping_item(id: ItemId, name: &str, purchased: bool) -> ShoppingItem {
    ShoppingItem {
        id,
        item_name: name.to_string(),
        quantity: 1,
        quantity_unit: Some("个".to_string()),
        is_purchased: i64::from(purchased),
        reason: None,
        created_at: None,
    }
}

pub fn recipe(name: &str, missing: &[&str]) -> Recipe {
    Recipe {
        id: Some(1),
        name: name.to_string(),
        name_cn: Some(format!("{}(中)", name)),
        category: None,
        ingredients: None,
        prep_time: Some(10),
        cook_time: Some(15),
        match_rate: Some(50.0),
        missing_ingredients: Some(missing.iter().map(|s| s.to_string()).collect()),
    }
}

#[async_trait]
impl InventoryApi for FakeApi {
    async fn health(&self) -> RequestResult<ApiInfo> {
        self.enter(Call::Health).await?;
        Ok(ApiInfo {
            message: "FreshTrack API is running!".to_string(),
            version: "1.0.0".to_string(),
            status: "healthy".to_string(),
        })
    }

    async fn user(&self, user: UserId) -> RequestResult<User> {
        self.enter(Call::User(user)).await?;
        Ok(User {
            id: user,
            email: "demo@example.com".to_string(),
            username: Some("demo".to_string()),
            created_at: None,
        })
    }

    async fn stats(&self, user: UserId) -> RequestResult<Stats> {
        self.enter(Call::Stats(user)).await?;
        Ok(self.stats.lock().unwrap().clone())
    }

    async fn expiring_items(&self, user: UserId, days: u32) -> RequestResult<Vec<FoodItem>> {
        self.enter(Call::Expiring(user, days)).await?;
        Ok(self.expiring.lock().unwrap().clone())
    }

    async fn list_items(&self, user: UserId, include_consumed: bool) -> RequestResult<Vec<FoodItem>> {
        self.enter(Call::ListItems(user, include_consumed)).await?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn consume_item(&self, id: ItemId) -> RequestResult<()> {
        self.enter(Call::Consume(id)).await?;
        self.items.lock().unwrap().retain(|item| item.id != id);
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> RequestResult<()> {
        self.enter(Call::Delete(id)).await?;
        self.items.lock().unwrap().retain(|item| item.id != id);
        Ok(())
    }

    async fn create_item(&self, user: UserId, item: &NewFoodItem) -> RequestResult<FoodItem> {
        self.enter(Call::CreateItem(user, item.clone())).await?;
        let mut items = self.items.lock().unwrap();
        let created = FoodItem {
            id: items.len() as ItemId + 100,
            food_name: item.food_name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            quantity_unit: item.quantity_unit.clone(),
            expiration_date: item.expiration_date.clone(),
            purchase_date: None,
            days_left: Some(7),
            urgency_level: UrgencyLevel::Fresh,
            is_consumed: 0,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn recommend_recipes(&self, user: UserId, limit: u32) -> RequestResult<Vec<Recipe>> {
        self.enter(Call::Recipes(user, limit)).await?;
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn shopping_list(
        &self,
        user: UserId,
        include_purchased: bool,
    ) -> RequestResult<Vec<ShoppingItem>> {
        self.enter(Call::Shopping(user, include_purchased)).await?;
        Ok(self.shopping.lock().unwrap().clone())
    }

    async fn create_shopping_item(
        &self,
        user: UserId,
        item: &NewShoppingItem,
    ) -> RequestResult<ShoppingItem> {
        self.enter(Call::CreateShopping(user, item.clone())).await?;
        let mut shopping = self.shopping.lock().unwrap();
        let created = ShoppingItem {
            id: shopping.len() as ItemId + 500,
            item_name: item.item_name.clone(),
            quantity: item.quantity,
            quantity_unit: item.quantity_unit.clone(),
            is_purchased: 0,
            reason: item.reason.clone(),
            created_at: None,
        };
        shopping.push(created.clone());
        Ok(created)
    }

    async fn purchase_shopping_item(&self, id: ItemId) -> RequestResult<()> {
        self.enter(Call::Purchase(id)).await?;
        for entry in self.shopping.lock().unwrap().iter_mut() {
            if entry.id == id {
                entry.is_purchased = 1;
            }
        }
        Ok(())
    }
}
