use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_messages::MessageKind;
use crate::models::{Favorite, Route, User};
use crate::services::ApiClient;
use crate::state::{SessionAction, SessionState};
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_CURRENT_USER};

type Dispatcher = UseReducerDispatcher<SessionState>;
type PushMessage = Callback<(String, MessageKind)>;

/// Session state plus every action the UI can take on it.
#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: UseReducerHandle<SessionState>,
    pub create_user: Callback<String>,
    pub load_user: Callback<String>,
    pub logout: Callback<()>,
    pub search: Callback<String>,
    pub select_route: Callback<Route>,
    pub clear_selection: Callback<()>,
    pub add_favorite: Callback<Route>,
    pub delete_favorite: Callback<Favorite>,
}

#[hook]
pub fn use_session(api: ApiClient, push: PushMessage) -> UseSessionHandle {
    let state = use_reducer(SessionState::default);

    // Restore a stored session once on startup; without one the login view
    // stays up.
    {
        let state = state.clone();
        let api = api.clone();
        let push = push.clone();
        use_effect_with((), move |_| {
            if let Some(stored) = load_from_storage::<User>(STORAGE_KEY_CURRENT_USER) {
                log::info!("✅ Restored session for {}", stored.username);
                state.dispatch(SessionAction::LoggedIn(stored.clone()));
                load_routes(api.clone(), Some(stored.clone()), state.dispatcher(), push.clone());
                load_favorites(api, Some(stored), state.dispatcher(), push);
            }
            || ()
        });
    }

    let create_user = {
        let api = api.clone();
        let state = state.clone();
        let push = push.clone();
        Callback::from(move |username: String| {
            let username = username.trim().to_string();
            if username.is_empty() {
                push.emit(("Please enter a username".to_string(), MessageKind::Error));
                return;
            }

            let api = api.clone();
            let state = state.clone();
            let push = push.clone();
            state.dispatch(SessionAction::Busy(true));
            spawn_local(async move {
                match api.create_user(&username).await {
                    Ok(user) => finish_login(
                        api,
                        user,
                        "User created successfully!",
                        state.dispatcher(),
                        push,
                    ),
                    Err(e) => {
                        log::error!("❌ Error creating user: {}", e);
                        push.emit((format!("Error creating user: {}", e), MessageKind::Error));
                        abort_session(state.dispatcher());
                    }
                }
                state.dispatch(SessionAction::Busy(false));
            });
        })
    };

    let load_user = {
        let api = api.clone();
        let state = state.clone();
        let push = push.clone();
        Callback::from(move |username: String| {
            let username = username.trim().to_string();
            if username.is_empty() {
                push.emit(("Please enter a username".to_string(), MessageKind::Error));
                return;
            }

            let api = api.clone();
            let state = state.clone();
            let push = push.clone();
            state.dispatch(SessionAction::Busy(true));
            spawn_local(async move {
                match api.get_user_by_username(&username).await {
                    Ok(user) => {
                        let welcome = format!("User {} loaded successfully!", user.username);
                        finish_login(api, user, &welcome, state.dispatcher(), push);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading user: {}", e);
                        push.emit((format!("Error loading user: {}", e), MessageKind::Error));
                        abort_session(state.dispatcher());
                    }
                }
                state.dispatch(SessionAction::Busy(false));
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            let _ = remove_from_storage(STORAGE_KEY_CURRENT_USER);
            state.dispatch(SessionAction::SessionCleared);
        })
    };

    let search = {
        let state = state.clone();
        Callback::from(move |query: String| state.dispatch(SessionAction::QueryChanged(query)))
    };

    let select_route = {
        let state = state.clone();
        Callback::from(move |route: Route| state.dispatch(SessionAction::RouteSelected(route)))
    };

    let clear_selection = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SessionAction::SelectionCleared))
    };

    let add_favorite = {
        let api = api.clone();
        let state = state.clone();
        let push = push.clone();
        Callback::from(move |route: Route| {
            let Some(user) = state.user.clone() else {
                push.emit(("Please log in first".to_string(), MessageKind::Error));
                return;
            };

            let api = api.clone();
            let state = state.clone();
            let push = push.clone();
            spawn_local(async move {
                match api.add_favorite(user.id, &route.route_id, "route").await {
                    Ok(()) => {
                        push.emit(("Added to favorites!".to_string(), MessageKind::Success));
                        load_favorites(api, Some(user), state.dispatcher(), push);
                    }
                    Err(e) => {
                        log::error!("❌ Error adding favorite: {}", e);
                        push.emit((format!("Error adding favorite: {}", e), MessageKind::Error));
                    }
                }
            });
        })
    };

    let delete_favorite = {
        let api = api.clone();
        let state = state.clone();
        let push = push.clone();
        Callback::from(move |favorite: Favorite| {
            let Some(user) = state.user.clone() else {
                push.emit(("Please log in first".to_string(), MessageKind::Error));
                return;
            };

            let api = api.clone();
            let state = state.clone();
            let push = push.clone();
            spawn_local(async move {
                match api
                    .delete_favorite(user.id, &favorite.item_id, &favorite.kind)
                    .await
                {
                    Ok(()) => {
                        push.emit(("Removed from favorites!".to_string(), MessageKind::Success));
                        load_favorites(api, Some(user), state.dispatcher(), push);
                    }
                    Err(e) => {
                        log::error!("❌ Error removing favorite: {}", e);
                        push.emit((format!("Error removing favorite: {}", e), MessageKind::Error));
                    }
                }
            });
        })
    };

    UseSessionHandle {
        state,
        create_user,
        load_user,
        logout,
        search,
        select_route,
        clear_selection,
        add_favorite,
        delete_favorite,
    }
}

fn finish_login(api: ApiClient, user: User, message: &str, dispatch: Dispatcher, push: PushMessage) {
    log::info!("✅ Logged in as {} (id {})", user.username, user.id);
    if let Err(e) = save_to_storage(STORAGE_KEY_CURRENT_USER, &user) {
        log::warn!("⚠️ Could not persist session: {}", e);
    }
    push.emit((message.to_string(), MessageKind::Success));
    dispatch.dispatch(SessionAction::LoggedIn(user.clone()));
    load_routes(api.clone(), Some(user.clone()), dispatch.clone(), push.clone());
    load_favorites(api, Some(user), dispatch, push);
}

/// Session-level failures clear everything, including the stored user.
fn abort_session(dispatch: Dispatcher) {
    let _ = remove_from_storage(STORAGE_KEY_CURRENT_USER);
    dispatch.dispatch(SessionAction::SessionCleared);
}

fn load_routes(api: ApiClient, user: Option<User>, dispatch: Dispatcher, push: PushMessage) {
    if user.is_none() {
        log::warn!("⚠️ Attempted to load routes without a logged-in user");
        return;
    }

    spawn_local(async move {
        match api.get_routes().await {
            Ok(routes) => {
                log::info!("🚏 Routes loaded: {}", routes.len());
                dispatch.dispatch(SessionAction::RoutesLoaded(routes));
            }
            Err(e) => {
                log::error!("❌ Error loading routes: {}", e);
                push.emit((format!("Error loading routes: {}", e), MessageKind::Error));
                dispatch.dispatch(SessionAction::RoutesFailed(e));
            }
        }
    });
}

fn load_favorites(api: ApiClient, user: Option<User>, dispatch: Dispatcher, push: PushMessage) {
    let Some(user) = user else {
        log::warn!("⚠️ Attempted to load favorites without a logged-in user");
        return;
    };

    spawn_local(async move {
        match api.get_favorites(user.id).await {
            Ok(favorites) => {
                log::info!("⭐ Favorites loaded: {}", favorites.len());
                dispatch.dispatch(SessionAction::FavoritesLoaded(favorites));
            }
            Err(e) => {
                log::error!("❌ Error loading favorites: {}", e);
                push.emit((format!("Error loading favorites: {}", e), MessageKind::Error));
                dispatch.dispatch(SessionAction::FavoritesFailed(e));
            }
        }
    });
}
