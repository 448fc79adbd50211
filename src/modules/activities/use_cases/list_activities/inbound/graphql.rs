use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<(String, Activity)> for GqlActivity {
    fn from((name, activity): (String, Activity)) -> Self {
        Self {
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activities = state
            .queries
            .list_activities()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(activities.into_iter().map(Into::into).collect())
    }

    async fn activity(&self, context: &Context<'_>, name: String) -> GqlResult<Option<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let mut activities = state
            .queries
            .list_activities()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(activities
            .remove(&name)
            .map(|activity| GqlActivity::from((name, activity))))
    }
}
