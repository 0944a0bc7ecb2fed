mod antennas;
mod patrol;
