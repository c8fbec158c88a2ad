use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use tastetrail_api::config::AppConfig;
use tastetrail_api::router;
use tastetrail_api::seed::seed_catalogue;
use tastetrail_api::state::AppState;
use tastetrail_storage::objects::ObjectStore;

struct TestApp {
    _dir: TempDir,
    router: Router,
}

async fn app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let store = ObjectStore::local(dir.path());
    assert_eq!(seed_catalogue(&store).await.unwrap(), 18);

    let mut config = AppConfig::local(dir.path());
    config.bcrypt_cost = 4;
    config.admin_emails = vec!["chef@example.com".to_string()];

    TestApp {
        router: router(AppState::new(store, config)),
        _dir: dir,
    }
}

impl TestApp {
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    async fn register(&self, name: &str, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({"name": name, "email": email, "password": "s3cret!"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }
}

fn ids(recipes: &Value) -> Vec<&str> {
    recipes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn seeding_twice_writes_nothing_new() {
    let dir = tempfile::tempdir().unwrap();
    let store = ObjectStore::local(dir.path());
    assert_eq!(seed_catalogue(&store).await.unwrap(), 18);
    assert_eq!(seed_catalogue(&store).await.unwrap(), 0);
}

#[tokio::test]
async fn lists_canonical_recipes() {
    let app = app().await;
    let (status, body) = app.get("/api/recipes").await;
    assert_eq!(status, StatusCode::OK);

    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 18);
    for recipe in recipes {
        assert_eq!(recipe["title"], recipe["name"]);
        assert_eq!(recipe["diet"], recipe["dietType"]);
        assert!(!recipe["image"].as_str().unwrap().is_empty());
        for step in recipe["instructions"].as_array().unwrap() {
            assert!(step.as_str().unwrap().ends_with('.'));
        }
    }
}

#[tokio::test]
async fn filters_by_query_parameters() {
    let app = app().await;

    let (_, body) = app.get("/api/recipes?diet=vegan&prepTime=20").await;
    assert_eq!(ids(&body), ["5"]);

    let (_, body) = app.get("/api/recipes?cuisine=Italian").await;
    assert_eq!(ids(&body), ["2", "3", "9", "13"]);

    let (_, body) = app.get("/api/recipes?diet=&cuisine=&prepTime=&search=").await;
    assert_eq!(body.as_array().unwrap().len(), 18);

    let (status, body) = app.get("/api/recipes?prepTime=soon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn fetches_one_recipe_or_404() {
    let app = app().await;

    let (status, body) = app.get("/api/recipes/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["recipe"]["title"], "Mediterranean Quinoa Salad");
    assert_eq!(
        body["recipe"]["ingredients"][0],
        json!({"amount": "1", "unit": "cup", "name": "quinoa"})
    );

    let (status, body) = app.get("/api/recipes/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn scales_a_recipe_to_requested_servings() {
    let app = app().await;
    let (status, body) = app.get("/api/recipes/1/scaled?servings=8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["servings"], 8);
    assert_eq!(body["ratio"], 2.0);
    assert_eq!(body["recipe"]["servings"], 8);
    assert_eq!(body["recipe"]["ingredients"][0]["amount"], "2");
}

#[tokio::test]
async fn register_and_login() {
    let app = app().await;
    app.register("Ada", "Ada@Example.com").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"name": "Ada again", "email": "ada@example.com", "password": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists with this email");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "ada@example.com", "password": "s3cret!"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["name"], "Ada");
    assert!(body["user"].get("passwordHash").is_none());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "ada@example.com", "password": "wrong"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "nobody@example.com", "password": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = app().await;

    let (status, body) = app.get("/api/user/saved").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Access denied");

    let (status, body) = app
        .send(Method::GET, "/api/user/saved", Some("not-a-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn only_the_author_may_change_a_recipe() {
    let app = app().await;
    let author = app.register("Author", "author@example.com").await;
    let other = app.register("Other", "other@example.com").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/recipes",
            Some(author.as_str()),
            Some(json!({
                "title": "Pizza",
                "ingredients": ["1 pizza dough", {"amount": "2", "unit": "cups", "name": "cheese"}],
                "instructions": "Preheat oven. Add cheese. Bake.",
                "servings": 2
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let id = body["recipe"]["id"].as_str().unwrap().to_string();
    assert_eq!(
        body["recipe"]["instructions"],
        json!(["Preheat oven.", "Add cheese.", "Bake."])
    );

    let update = json!({"title": "Better Pizza", "ingredients": ["1 pizza dough"]});
    let uri = format!("/api/recipes/{id}");

    let (status, _) = app
        .send(Method::PUT, &uri, Some(other.as_str()), Some(update.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(Method::PUT, &uri, Some(author.as_str()), Some(update))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["title"], "Better Pizza");

    let (status, _) = app.send(Method::DELETE, &uri, Some(other.as_str()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.send(Method::DELETE, &uri, Some(author.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_routes_need_the_admin_role() {
    let app = app().await;
    let user = app.register("User", "user@example.com").await;
    let admin = app.register("Chef", "chef@example.com").await;

    let body = json!({"cuisine": "Greek"});
    let (status, _) = app
        .send(Method::PUT, "/api/admin/recipes/1/categorize", Some(user.as_str()), Some(body.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, response) = app
        .send(Method::PUT, "/api/admin/recipes/1/categorize", Some(admin.as_str()), Some(body))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["recipe"]["cuisine"], "Greek");

    let (_, listed) = app.get("/api/recipes?cuisine=Greek").await;
    assert_eq!(ids(&listed), ["1"]);

    let (status, _) = app
        .send(Method::DELETE, "/api/admin/recipes/2", Some(admin.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = app.get("/api/recipes").await;
    assert_eq!(listed.as_array().unwrap().len(), 17);
}

#[tokio::test]
async fn reviews_are_validated_and_summarized() {
    let app = app().await;
    let ada = app.register("Ada", "ada@example.com").await;
    let bob = app.register("Bob", "bob@example.com").await;

    let (status, _) = app
        .send(Method::POST, "/api/recipes/1/reviews", Some(ada.as_str()), Some(json!({"rating": 6})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(Method::POST, "/api/recipes/999/reviews", Some(ada.as_str()), Some(json!({"rating": 4})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/recipes/1/reviews",
            Some(ada.as_str()),
            Some(json!({"rating": 5, "comment": "Lovely"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["username"], "Ada");

    let (status, body) = app
        .send(Method::POST, "/api/recipes/1/reviews", Some(ada.as_str()), Some(json!({"rating": 3})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "You have already reviewed this recipe");

    let (status, _) = app
        .send(Method::POST, "/api/recipes/1/reviews", Some(bob.as_str()), Some(json!({"rating": 4})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/recipes/1/reviews").await;
    assert_eq!(body["summary"]["count"], 2);
    assert_eq!(body["summary"]["averageRating"], 4.5);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 2);

    let (_, body) = app.get("/api/recipes/2/reviews").await;
    assert_eq!(body["summary"]["count"], 0);
    assert_eq!(body["summary"]["averageRating"], 0.0);
}

#[tokio::test]
async fn saved_recipes_and_profile() {
    let app = app().await;
    let token = app.register("Ada", "ada@example.com").await;
    let save = json!({"recipeId": "1"});

    for _ in 0..2 {
        let (status, _) = app
            .send(Method::POST, "/api/user/recipes/save", Some(token.as_str()), Some(save.clone()))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.send(Method::GET, "/api/user/saved", Some(token.as_str()), None).await;
    assert_eq!(body["savedRecipes"], json!(["1"]));

    let (_, body) = app
        .send(Method::GET, "/api/user/saved/recipes", Some(token.as_str()), None)
        .await;
    assert_eq!(ids(&body["recipes"]), ["1"]);

    let (status, _) = app
        .send(Method::POST, "/api/user/recipes/unsave", Some(token.as_str()), Some(save))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.send(Method::GET, "/api/user/saved", Some(token.as_str()), None).await;
    assert_eq!(body["savedRecipes"], json!([]));

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/users/profile",
            Some(token.as_str()),
            Some(json!({"name": "Ada L.", "diet": "vegan", "cuisines": ["Thai"]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada L.");
    assert_eq!(body["diet"], "vegan");
    assert_eq!(body["cuisines"], json!(["Thai"]));
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn meal_plans_drive_shopping_lists() {
    let app = app().await;
    let token = app.register("Ada", "ada@example.com").await;
    let plan = json!({"days": [
        {"day": "Monday", "meals": ["1", "no-such-recipe"]},
        {"day": "Tuesday", "meals": []}
    ]});

    let (status, _) = app
        .send(Method::PUT, "/api/meal-plans/not-a-week", Some(token.as_str()), Some(plan.clone()))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(Method::PUT, "/api/meal-plans/2024-01-15", Some(token.as_str()), Some(plan))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(Method::GET, "/api/meal-plans/2024-01-15", Some(token.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["days"][0]["meals"]), ["1"]);
    assert_eq!(body["days"][1]["meals"], json!([]));

    let (status, body) = app
        .send(Method::GET, "/api/shopping-list/2024-01-15?servings=8", Some(token.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let items: Vec<&Value> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|g| g["items"].as_array().unwrap())
        .collect();
    assert_eq!(items.len(), 10);
    assert!(items.iter().any(|i| i["text"] == "2 cup quinoa"));

    let (status, _) = app
        .send(Method::DELETE, "/api/meal-plans/2024-01-15", Some(token.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(Method::GET, "/api/meal-plans/2024-01-15", Some(token.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Meal plan not found");
}

#[tokio::test]
async fn categorizes_free_form_items() {
    let app = app().await;
    let (status, body) = app
        .send(
            Method::POST,
            "/api/shopping-list/categorize",
            None,
            Some(json!({"items": [
                "1 mystery fruit",
                "2 chicken breasts",
                {"amount": "1", "unit": "tsp", "name": "turmeric"},
                42
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let groups: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["category"].as_str().unwrap())
        .collect();
    assert_eq!(groups, ["Proteins", "Spices & Seasonings", "Other"]);
    assert_eq!(body["categories"][0]["items"][0]["id"], 1);
    assert_eq!(body["categories"][2]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn seeded_recipes_list_in_catalogue_order_and_new_ones_are_appended() {
    let app = app().await;
    let (_, body) = app.get("/api/recipes").await;
    let expected: Vec<String> = (1..=18).map(|n| n.to_string()).collect();
    assert_eq!(ids(&body), expected);

    let token = app.register("Ada", "ada@example.com").await;
    let mut created = Vec::new();
    for title in ["First Pie", "Second Pie"] {
        let (status, body) = app
            .send(
                Method::POST,
                "/api/recipes",
                Some(token.as_str()),
                Some(json!({"title": title, "ingredients": ["1 pie crust"]})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        created.push(body["recipe"]["id"].as_str().unwrap().to_string());
    }

    let (_, body) = app.get("/api/recipes").await;
    let listed = ids(&body);
    assert_eq!(listed.len(), 20);
    assert_eq!(listed[18..], [created[0].as_str(), created[1].as_str()]);

    // Updating keeps the recipe's place.
    let uri = format!("/api/recipes/{}", created[0]);
    let (status, _) = app
        .send(
            Method::PUT,
            &uri,
            Some(token.as_str()),
            Some(json!({"title": "First Pie, revised", "ingredients": ["1 pie crust"]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get("/api/recipes").await;
    assert_eq!(ids(&body)[18], created[0]);
}

#[tokio::test]
async fn recipes_need_a_title() {
    let app = app().await;
    let token = app.register("Ada", "ada@example.com").await;
    let (status, body) = app
        .send(
            Method::POST,
            "/api/recipes",
            Some(token.as_str()),
            Some(json!({"title": "   ", "ingredients": ["1 egg"]})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "missing required field: title");

    let (_, body) = app.get("/api/recipes").await;
    assert_eq!(body.as_array().unwrap().len(), 18);
}

#[tokio::test]
async fn malformed_requests_get_json_error_bodies() {
    let app = app().await;
    let token = app.register("Ada", "ada@example.com").await;

    let (status, body) = app.get("/api/recipes/1/scaled?servings=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/recipes/1/reviews",
            Some(token.as_str()),
            Some(json!({"rating": "5"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let (status, body) = app
        .send(Method::POST, "/api/shopping-list/categorize", None, Some(json!("nope")))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn concurrent_registrations_for_one_email_admit_one_user() {
    let app = app().await;
    let register = || {
        app.send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"name": "Ada", "email": "ada@example.com", "password": "pw"})),
        )
    };

    let ((first, _), (second, _)) = tokio::join!(register(), register());
    let mut statuses = [first, second];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::BAD_REQUEST]);
}
