mod account;
mod hackathon;
mod mentor_judge;
mod organizer;
mod participant;
mod registration;
mod team;
mod timeline;
