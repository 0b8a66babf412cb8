mod player_season;
