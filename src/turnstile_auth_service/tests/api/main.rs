mod helpers;

mod home;
mod login;
mod logout;
mod public_pages;
mod register;
