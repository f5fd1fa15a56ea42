pub mod account_repo;
