mod listing_tests;
