mod sleep;
mod workouts;
