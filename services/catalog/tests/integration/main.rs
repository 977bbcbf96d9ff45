mod helpers;

mod auth_test;
mod recommendation_test;
mod roaster_test;
mod tasting_test;
