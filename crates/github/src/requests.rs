pub mod list_user_repos;
