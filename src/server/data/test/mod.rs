mod horse;
mod otp;
mod session;
mod ticket;
mod user;
