mod booking;
mod review;
mod trip;
mod user;
mod vehicle;
