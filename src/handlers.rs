use crate::date_key;
use crate::errors::AppError;
use crate::habits::HabitError;
use crate::grid::{build_calendar_grid, total_days};
use crate::models::{
    AppData, AssignCategoryRequest, CalendarGridResponse, Category, CategoryRequest, CreateHabitRequest,
    DecodedKeyResponse, HabitView, Owner, RenameHabitRequest, ToggleDayRequest, Workspace,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::summary::{habit_view_at, habit_views_at};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::info;

/// Header carrying the account id asserted by the fronting identity provider.
pub const USER_HEADER: &str = "x-user-id";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today_key = date_key::encode(state.today());
    Html(render_index(today_key.as_str()))
}

pub async fn get_grid(State(state): State<AppState>) -> Json<CalendarGridResponse> {
    let today = state.today();
    let lanes = build_calendar_grid(state.epoch, today);
    Json(CalendarGridResponse {
        epoch: state.epoch.to_string(),
        today: today.to_string(),
        today_key: date_key::encode(today).into_string(),
        total_days: total_days(&lanes),
        lanes,
    })
}

pub async fn decode_key(Path(key): Path<String>) -> Result<Json<DecodedKeyResponse>, AppError> {
    let parts = date_key::decode(&key)?;
    let date = parts.to_date()?;
    Ok(Json(DecodedKeyResponse {
        key,
        month: parts.month,
        day_of_week: parts.day_of_week,
        day: parts.day,
        year: parts.year(),
        date: date.to_string(),
    }))
}

pub async fn list_habits(State(state): State<AppState>, headers: HeaderMap) -> Json<Vec<HabitView>> {
    let owner = owner_from(&headers);
    let data = state.data.lock().await;
    Json(habit_views_at(state.today(), data.workspace(&owner)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<HabitView>), AppError> {
    let owner = owner_from(&headers);
    let mut data = state.data.lock().await;
    let id = data.allocate_id();
    create_in(&mut data, &owner, |workspace| {
        workspace
            .create_habit(id, &payload.title, payload.category_id)
            .map(|_| ())
    })?;
    info!("created habit {id}");

    save(&state, &owner, &data).await?;
    let view = view_of(state.today(), &data, &owner, id)?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn rename_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(payload): Json<RenameHabitRequest>,
) -> Result<Json<HabitView>, AppError> {
    let owner = owner_from(&headers);
    let mut data = state.data.lock().await;
    habits_of(&mut data, &owner, id)?.rename_habit(id, &payload.title)?;

    save(&state, &owner, &data).await?;
    Ok(Json(view_of(state.today(), &data, &owner, id)?))
}

pub async fn assign_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(payload): Json<AssignCategoryRequest>,
) -> Result<Json<HabitView>, AppError> {
    let owner = owner_from(&headers);
    let mut data = state.data.lock().await;
    habits_of(&mut data, &owner, id)?.assign_category(id, payload.category_id)?;

    save(&state, &owner, &data).await?;
    Ok(Json(view_of(state.today(), &data, &owner, id)?))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(payload): Json<ToggleDayRequest>,
) -> Result<Json<HabitView>, AppError> {
    let today = state.today();
    apply_toggle(&state, &owner_from(&headers), id, payload.date_key.trim(), today).await
}

pub async fn toggle_today(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<HabitView>, AppError> {
    let today = state.today();
    let today_key = date_key::encode(today);
    apply_toggle(&state, &owner_from(&headers), id, today_key.as_str(), today).await
}

pub async fn delete_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let owner = owner_from(&headers);
    let mut data = state.data.lock().await;
    habits_of(&mut data, &owner, id)?.delete_habit(id)?;
    info!("deleted habit {id}");

    save(&state, &owner, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Vec<Category>> {
    let owner = owner_from(&headers);
    let data = state.data.lock().await;
    let categories: Vec<Category> = data
        .workspace(&owner)
        .map(|workspace| workspace.categories.values().cloned().collect())
        .unwrap_or_default();
    Json(categories)
}

pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let owner = owner_from(&headers);
    let mut data = state.data.lock().await;
    let id = data.allocate_id();
    let category = create_in(&mut data, &owner, |workspace| {
        workspace.create_category(id, &payload.name).cloned()
    })?;
    info!("created category {id}");

    save(&state, &owner, &data).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn rename_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let owner = owner_from(&headers);
    let mut data = state.data.lock().await;
    let category = categories_of(&mut data, &owner, id)?
        .rename_category(id, &payload.name)?
        .clone();

    save(&state, &owner, &data).await?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let owner = owner_from(&headers);
    let mut data = state.data.lock().await;
    categories_of(&mut data, &owner, id)?.delete_category(id)?;
    info!("deleted category {id}");

    save(&state, &owner, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn apply_toggle(
    state: &AppState,
    owner: &Owner,
    id: u64,
    key: &str,
    today: NaiveDate,
) -> Result<Json<HabitView>, AppError> {
    let mut data = state.data.lock().await;
    habits_of(&mut data, owner, id)?.toggle_day(id, key, today)?;

    save(state, owner, &data).await?;
    Ok(Json(view_of(today, &data, owner, id)?))
}

/// Runs a creation against the owner's workspace, adding a new account
/// workspace only once the creation has succeeded.
fn create_in<T>(
    data: &mut AppData,
    owner: &Owner,
    create: impl FnOnce(&mut Workspace) -> Result<T, HabitError>,
) -> Result<T, HabitError> {
    if let Some(workspace) = data.workspace_existing_mut(owner) {
        return create(workspace);
    }
    let mut workspace = Workspace::default();
    let created = create(&mut workspace)?;
    *data.workspace_mut(owner) = workspace;
    Ok(created)
}

/// An owner with no workspace yet has no habit `id` either.
fn habits_of<'a>(
    data: &'a mut AppData,
    owner: &Owner,
    id: u64,
) -> Result<&'a mut Workspace, HabitError> {
    data.workspace_existing_mut(owner)
        .ok_or(HabitError::HabitNotFound(id))
}

fn categories_of<'a>(
    data: &'a mut AppData,
    owner: &Owner,
    id: u64,
) -> Result<&'a mut Workspace, HabitError> {
    data.workspace_existing_mut(owner)
        .ok_or(HabitError::CategoryNotFound(id))
}

fn owner_from(headers: &HeaderMap) -> Owner {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .map(|user| Owner::Account(user.to_string()))
        .unwrap_or(Owner::Guest)
}

async fn save(state: &AppState, owner: &Owner, data: &AppData) -> Result<(), AppError> {
    if owner.is_persisted() {
        persist_data(&state.data_path, data).await?;
    }
    Ok(())
}

fn view_of(
    today: NaiveDate,
    data: &AppData,
    owner: &Owner,
    id: u64,
) -> Result<HabitView, AppError> {
    let workspace = data
        .workspace(owner)
        .ok_or_else(|| AppError::not_found(format!("habit {id} not found")))?;
    let habit = workspace.habit(id)?;
    Ok(habit_view_at(today, workspace, habit))
}
